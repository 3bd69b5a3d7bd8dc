use anyhow::Context;
use std::path::Path;
use waf_core::{
    corpus::Corpus,
    generate::{generate, OutputKind},
};

pub fn run(corpus: &Corpus, out_dir: &Path) -> anyhow::Result<()> {
    println!("Generating markdown data files...");
    let report = generate(corpus, out_dir)
        .with_context(|| format!("failed to generate markdown into {}", out_dir.display()))?;

    println!("Generating pillar files...");
    for f in report.of_kind(OutputKind::Pillar) {
        println!("  {}: {} practices, {} lines", f.file_name(), f.items, f.lines);
    }

    println!("Generating lens files...");
    for f in report.of_kind(OutputKind::Lens) {
        println!("  {}: {} practices, {} lines", f.file_name(), f.items, f.lines);
    }

    println!("Generating DevOps files...");
    for f in report.of_kind(OutputKind::Saga) {
        println!("  {}: {} capabilities, {} lines", f.file_name(), f.items, f.lines);
    }
    for f in report.of_kind(OutputKind::DevopsIndex) {
        println!("  {}: overview of {} capabilities", f.file_name(), f.items);
    }

    println!("Generating main index...");
    for f in report.of_kind(OutputKind::Index) {
        println!("  {}: main data index", f.file_name());
    }

    println!("\nDone!");
    Ok(())
}
