use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::envs;
use crate::errors::{HelloError, HelloResult};
use crate::options::LoggingOptions;

/// Parse a filter directive into an [`EnvFilter`].
pub fn build_env_filter(directive: &str) -> HelloResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| HelloError::Config(format!("invalid log filter '{}': {}", directive, e)))
}

/// Install the process-wide tracing subscriber writing to stderr.
///
/// Returns `Ok(false)` when a global tracing subscriber or `log` logger is
/// already installed; the host process (or an earlier call) owns logging in
/// that case.
pub fn init_logging(options: &LoggingOptions) -> HelloResult<bool> {
    let env_value = std::env::var(envs::HELLO_EXT_LOG).ok();
    let directive = options.resolve_filter(env_value.as_deref());
    let env_filter = build_env_filter(&directive)?;

    let installed = register_to_tracing(env_filter);
    if installed {
        tracing::debug!(filter = %directive, "Installed tracing subscriber");
    }
    Ok(installed)
}

fn register_to_tracing(env_filter: EnvFilter) -> bool {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(false),
        )
        .try_init()
        .is_ok()
}
