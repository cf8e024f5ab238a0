//! keel-telemetry core: event, metric, and clock contracts.
//!
//! This crate defines the resource lifecycle event consumed by the telemetry
//! listener, the registry/counter capabilities it submits metrics to, and the
//! injected clock. It carries no transport or runtime dependencies so the
//! listener can be embedded in any pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TelemetryError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod event;
pub mod metrics;

/// Shared result type.
pub use error::{Result, TelemetryError};
