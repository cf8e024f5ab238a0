//! Resource-checked telemetry listener.
//!
//! Translates each resource lifecycle event into one increment of the
//! `keel.resource.checked` counter. Recording is best-effort: any failure raised
//! by the registry call, whether an `Err` or an unwinding panic, is logged and
//! dropped here so the checking pipeline never sees it. Panics compiled with
//! `panic = "abort"` cannot be intercepted.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use keel_telemetry_core::clock::Clock;
use keel_telemetry_core::event::ResourceLifecycleEvent;
use keel_telemetry_core::metrics::{Registry, Tag};
use keel_telemetry_core::Result;

use crate::publisher::ResourceEventListener;

/// Counter name. Dashboards and alerts depend on it; do not change.
pub const RESOURCE_CHECKED_COUNTER_ID: &str = "keel.resource.checked";

pub const TAG_RESOURCE_KIND: &str = "resourceKind";
pub const TAG_RESOURCE_ID: &str = "resourceId";
pub const TAG_RESOURCE_APPLICATION: &str = "resourceApplication";
pub const TAG_RESOURCE_STATE: &str = "resourceState";

/// Tags describing a checked resource.
pub fn resource_checked_tags(event: &ResourceLifecycleEvent) -> Vec<Tag> {
    vec![
        Tag::new(TAG_RESOURCE_KIND, event.kind().to_string()),
        Tag::new(TAG_RESOURCE_ID, event.id()),
        Tag::new(TAG_RESOURCE_APPLICATION, event.application()),
        Tag::new(TAG_RESOURCE_STATE, event.state().as_str()),
    ]
}

pub struct TelemetryListener {
    registry: Arc<dyn Registry>,
    // Reserved for emission latency measurements.
    clock: Arc<dyn Clock>,
}

impl TelemetryListener {
    pub fn new(registry: Arc<dyn Registry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Record that `event`'s resource was checked. Never fails, never panics
    /// on behalf of the registry.
    pub fn on_resource_checked(&self, event: &ResourceLifecycleEvent) {
        let tags = resource_checked_tags(event);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.submit(&tags)));

        let err = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(panic_info) => extract_panic_message(&panic_info),
        };
        tracing::error!(
            counter = RESOURCE_CHECKED_COUNTER_ID,
            resource_id = %event.id(),
            error = %err,
            "exception incrementing counter"
        );
    }

    fn submit(&self, tags: &[Tag]) -> Result<()> {
        self.registry
            .counter(RESOURCE_CHECKED_COUNTER_ID, tags)?
            .increment()
    }
}

impl ResourceEventListener for TelemetryListener {
    fn name(&self) -> &'static str {
        "telemetry"
    }

    fn on_resource_checked(&self, event: &ResourceLifecycleEvent) {
        TelemetryListener::on_resource_checked(self, event)
    }
}

fn extract_panic_message(panic_info: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
