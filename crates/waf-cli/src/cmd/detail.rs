use crate::output::{print_json, OutputFormat};
use waf_core::{corpus::Corpus, query};

pub fn run(corpus: &Corpus, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let practice = query::detail(corpus, id)?;

    if format == OutputFormat::Json {
        return print_json(&practice);
    }

    println!("## {}: {}", practice.id, practice.title);
    println!(
        "**Risk:** {} | **Pillar:** {} | **Lens:** {}",
        practice.risk,
        practice.pillar.as_deref().unwrap_or("N/A"),
        practice.lens.as_deref().unwrap_or("FRAMEWORK"),
    );
    println!();
    println!("{}", practice.description);
    println!();
    if let Some(outcome) = practice.outcome() {
        println!("**Desired Outcome:** {outcome}");
        println!();
    }
    if !practice.area.is_empty() {
        println!("**Areas:** {}", practice.area.join(", "));
        println!();
    }
    if !practice.related_ids.is_empty() {
        println!("**Related Practices:** {}", practice.related_ids.join(", "));
        println!();
    }
    println!("**Full Documentation:** {}", practice.href_or_na());
    Ok(())
}
