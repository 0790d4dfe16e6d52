use std::io::IsTerminal;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Crate-specific override, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "ND_EXPOSURE_LOG";

/// Quiet by default: the tables on stdout are the product, logs are diagnostics.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nd_exposure=debug,info"
    } else {
        "nd_exposure=warn"
    }
}

/// `ND_EXPOSURE_LOG`, then `RUST_LOG`, then the default for the verbosity.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Logs go to stderr so stdout only ever carries the tables. Colors only
/// when stderr is a terminal, so redirected logs stay plain text.
pub fn init_cli_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init()
}
