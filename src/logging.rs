//! Logging setup for the `id3tree` binary.
//!
//! Installs a global tracing subscriber writing to stderr,
//! so that the standard output carries nothing but the tree.
//! Verbosity follows `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";


/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}


/// Initialize tracing to write to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(LoggingError::SetGlobal)?;

    tracing::debug!("logging initialized");
    Ok(())
}
