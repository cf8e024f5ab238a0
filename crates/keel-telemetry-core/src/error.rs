//! Shared error type across keel-telemetry crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    /// Any failure raised by a metrics registry or one of its counters.
    #[error("registry: {0}")]
    Registry(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TelemetryError {
    /// Stable code used in logs and HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            TelemetryError::BadRequest(_) => "BAD_REQUEST",
            TelemetryError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            TelemetryError::Registry(_) => "REGISTRY",
            TelemetryError::Internal(_) => "INTERNAL",
        }
    }
}
