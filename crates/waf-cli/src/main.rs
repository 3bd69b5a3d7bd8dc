use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waf_cli::{
    cmd::{self, index::RiskLevel},
    output::OutputFormat,
    root,
};
use waf_core::{
    catalog::{Catalog, LENS_KEYS, PILLAR_KEYS, SAGA_CODES},
    corpus::Corpus,
};

#[derive(Parser)]
#[command(
    name = "waf-query",
    about = "Query AWS Well-Architected Framework best practices",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Source data directory (default: data/source next to the executable)
    #[arg(long, global = true, env = "WAF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List practices by filter
    Index {
        #[arg(long, short, value_parser = PILLAR_KEYS)]
        pillar: Option<String>,

        #[arg(long, short, value_parser = LENS_KEYS)]
        lens: Option<String>,

        #[arg(long, short, value_enum, ignore_case = true)]
        risk: Option<RiskLevel>,
    },

    /// Get practice details
    Detail {
        /// Practice ID (e.g., SEC01-BP01)
        id: String,
    },

    /// Search practices by keyword
    Search {
        /// Search keyword
        keyword: String,

        #[arg(long, short, value_parser = PILLAR_KEYS)]
        pillar: Option<String>,
    },

    /// List DevOps capabilities
    DevopsIndex {
        #[arg(long, short, value_parser = SAGA_CODES, ignore_case = true)]
        saga: Option<String>,
    },

    /// Get DevOps capability details
    DevopsDetail {
        /// Capability ID (e.g., DL.CI)
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    waf_cli::init_tracing(tracing::Level::WARN);

    let data_dir = root::resolve_data_dir(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
    let corpus = Corpus::new(data_dir, Catalog::builtin());
    let format = cli.format;

    let result = match cli.command {
        Commands::Index {
            pillar,
            lens,
            risk,
        } => cmd::index::run(&corpus, pillar.as_deref(), lens.as_deref(), risk, format),
        Commands::Detail { id } => cmd::detail::run(&corpus, &id, format),
        Commands::Search { keyword, pillar } => {
            cmd::search::run(&corpus, &keyword, pillar.as_deref(), format)
        }
        Commands::DevopsIndex { saga } => cmd::devops::index(&corpus, saga.as_deref(), format),
        Commands::DevopsDetail { id } => cmd::devops::detail(&corpus, &id, format),
    };

    if let Err(e) = result {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
