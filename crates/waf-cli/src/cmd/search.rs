use crate::output::{print_json, print_table, OutputFormat};
use serde::Serialize;
use waf_core::{corpus::Corpus, markdown::Table, query};

#[derive(Serialize)]
struct SearchEntry<'a> {
    id: &'a str,
    title: &'a str,
    risk: &'a str,
    pillar: &'a str,
    match_context: String,
}

pub fn run(
    corpus: &Corpus,
    keyword: &str,
    pillar: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let hits = query::search(corpus, keyword, pillar)?;
    tracing::debug!(keyword, hits = hits.len(), "search complete");

    if format == OutputFormat::Json {
        let out: Vec<_> = hits
            .iter()
            .map(|h| SearchEntry {
                id: &h.practice.id,
                title: &h.practice.title,
                risk: h.practice.risk.as_str(),
                pillar: h.practice.pillar.as_deref().unwrap_or_default(),
                match_context: h.match_context(),
            })
            .collect();
        return print_json(&out);
    }

    println!("## Search Results for '{keyword}'");
    println!();
    println!("Found {} matching practices", hits.len());
    println!();

    let mut table = Table::new(&["ID", "Title", "Risk", "Pillar"]);
    for h in &hits {
        let p = &h.practice;
        table.push_row(vec![
            p.id.clone(),
            p.title.clone(),
            p.risk.to_string(),
            p.pillar.clone().unwrap_or_default(),
        ]);
    }
    print_table(&table);
    Ok(())
}
