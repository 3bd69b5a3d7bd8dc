use clap::Parser;
use std::path::PathBuf;
use waf_cli::{cmd, root};
use waf_core::{catalog::Catalog, corpus::Corpus};

/// Generate markdown data files from the source JSON corpus.
#[derive(Parser)]
#[command(name = "waf-generate", version)]
struct Cli {
    /// Source data directory (default: data/source next to the executable)
    #[arg(long, env = "WAF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory (default: parent of the data directory)
    #[arg(long, env = "WAF_OUT_DIR")]
    out_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    waf_cli::init_tracing(tracing::Level::INFO);

    let data_dir = root::resolve_data_dir(cli.data_dir.as_deref());
    let out_dir = root::resolve_out_dir(cli.out_dir.as_deref(), &data_dir);
    tracing::debug!(
        data_dir = %data_dir.display(),
        out_dir = %out_dir.display(),
        "resolved directories"
    );
    let corpus = Corpus::new(data_dir, Catalog::builtin());

    if let Err(e) = cmd::generate::run(&corpus, &out_dir) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
