use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber used by the geocdf binaries.
/// Everything goes to stderr so that stdout only carries results.
/// Verbosity is read from `RUST_LOG` and defaults to `info`.
pub fn start_geocdf_tracing_subscriber() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
