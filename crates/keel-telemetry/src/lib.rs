//! Top-level facade crate for keel-telemetry.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use keel_telemetry_core::*;
}

pub mod gateway {
    pub use keel_telemetry_gateway::*;
}
