//! keel-telemetry gateway library entry.
//!
//! Hosts the resource-checked telemetry listener, the publisher that fans
//! lifecycle events out to listeners, the in-memory metrics registry, and the
//! HTTP surface used by the `keel-telemetry-gateway` binary and integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod listener;
pub mod obs;
pub mod ops;
pub mod publisher;
pub mod router;

pub use listener::{TelemetryListener, RESOURCE_CHECKED_COUNTER_ID};
pub use publisher::{EventPublisher, ResourceEventListener};
