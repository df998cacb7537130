//! Tracing subscriber bootstrap.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The default directive could not be parsed.
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// Directive that failed to parse.
        filter: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialised")]
    AlreadyInitialised,
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` when set and valid.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_directive` is
/// needed but malformed, and [`TelemetryError::AlreadyInitialised`] when a
/// global subscriber exists.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|source| TelemetryError::InvalidFilter {
            filter: default_directive.to_owned(),
            source,
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialised)
}
