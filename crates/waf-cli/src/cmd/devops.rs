use crate::output::{print_json, print_table, OutputFormat};
use serde::Serialize;
use waf_core::{capability::GuidanceItem, corpus::Corpus, markdown::Table, query};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CapabilitySummary<'a> {
    saga: &'a str,
    saga_code: &'a str,
    capability: &'a str,
    capability_code: &'a str,
    indicator_count: usize,
    anti_pattern_count: usize,
    metric_count: usize,
}

pub fn index(corpus: &Corpus, saga: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let capabilities = query::devops_index(corpus, saga)?;

    if format == OutputFormat::Json {
        let out: Vec<_> = capabilities
            .iter()
            .map(|c| CapabilitySummary {
                saga: &c.saga,
                saga_code: &c.saga_code,
                capability: &c.capability,
                capability_code: &c.capability_code,
                indicator_count: c.indicators.len(),
                anti_pattern_count: c.anti_patterns.len(),
                metric_count: c.metrics.len(),
            })
            .collect();
        return print_json(&out);
    }

    let mut table = Table::new(&[
        "Saga",
        "Capability",
        "Code",
        "Indicators",
        "Anti-Patterns",
        "Metrics",
    ]);
    for c in &capabilities {
        table.push_row(vec![
            c.saga.clone(),
            c.capability.clone(),
            c.code(),
            c.indicators.len().to_string(),
            c.anti_patterns.len().to_string(),
            c.metrics.len().to_string(),
        ]);
    }
    print_table(&table);
    Ok(())
}

pub fn detail(corpus: &Corpus, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let capability = query::devops_detail(corpus, id)?;

    if format == OutputFormat::Json {
        return print_json(&capability);
    }

    println!("## {}: {}", capability.saga, capability.capability);
    println!("**Code:** {}", capability.code());
    println!();
    println!("{}", capability.description);
    println!();
    println!("**Documentation:** {}", capability.href_or_na());
    println!();

    if !capability.indicators.is_empty() {
        print_items("Indicators", &capability.indicators);
        println!();
    }
    if !capability.anti_patterns.is_empty() {
        print_items("Anti-Patterns", &capability.anti_patterns);
        println!();
    }
    if !capability.metrics.is_empty() {
        print_items("Metrics", &capability.metrics);
    }
    Ok(())
}

fn print_items(heading: &str, items: &[GuidanceItem]) {
    println!("### {heading}");
    for item in items {
        println!("- **{}**: {}", item.id, item.title);
    }
}
