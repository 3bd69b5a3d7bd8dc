pub mod cmd;
pub mod output;
pub mod root;

/// Install the stderr `fmt` subscriber. `RUST_LOG` refines `default_level`.
pub fn init_tracing(default_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
