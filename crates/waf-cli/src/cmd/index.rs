use crate::output::{print_json, print_table, OutputFormat};
use clap::ValueEnum;
use serde::Serialize;
use waf_core::{
    corpus::Corpus,
    markdown::Table,
    query::{self, IndexFilter},
    types::Risk,
};

/// Risk level accepted on the command line (matched case-insensitively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl From<RiskLevel> for Risk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => Risk::High,
            RiskLevel::Medium => Risk::Medium,
            RiskLevel::Low => Risk::Low,
        }
    }
}

#[derive(Serialize)]
struct IndexEntry<'a> {
    id: &'a str,
    title: &'a str,
    risk: &'a str,
    pillar: &'a str,
    areas: &'a [String],
}

pub fn run(
    corpus: &Corpus,
    pillar: Option<&str>,
    lens: Option<&str>,
    risk: Option<RiskLevel>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let filter = IndexFilter {
        pillar,
        lens,
        risk: risk.map(Risk::from),
    };
    let practices = query::index(corpus, &filter)?;

    if format == OutputFormat::Json {
        let out: Vec<_> = practices
            .iter()
            .map(|p| IndexEntry {
                id: &p.id,
                title: &p.title,
                risk: p.risk.as_str(),
                pillar: p.pillar.as_deref().unwrap_or_default(),
                areas: &p.area,
            })
            .collect();
        return print_json(&out);
    }

    let mut table = Table::new(&["ID", "Title", "Risk", "Pillar"]);
    for p in &practices {
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
