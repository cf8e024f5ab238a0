//! In-process metrics backend.
//!
//! The gateway binary records counters in memory and exposes them in
//! Prometheus text format from the `/metrics` handler.

pub mod metrics;

pub use metrics::{AtomicCounter, InMemoryRegistry};
