use clap::ValueEnum;
use serde::Serialize;
use waf_core::markdown::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(table: &Table) {
    for line in table.lines() {
        println!("{line}");
    }
}
