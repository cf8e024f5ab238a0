//! Shared application state for the telemetry gateway.
//!
//! Wires the in-memory registry, the event publisher, and the telemetry
//! listener. Startup errors are returned, not panicked.

use std::sync::Arc;

use keel_telemetry_core::clock::{Clock, SystemClock};
use keel_telemetry_core::error::Result;
use keel_telemetry_core::metrics::Registry;

use crate::config::TelemetryConfig;
use crate::listener::TelemetryListener;
use crate::obs::InMemoryRegistry;
use crate::publisher::EventPublisher;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TelemetryConfig,
    registry: Arc<InMemoryRegistry>,
    publisher: EventPublisher,
}

impl AppState {
    pub fn new(cfg: TelemetryConfig) -> Result<Self> {
        Self::with_clock(cfg, Arc::new(SystemClock))
    }

    pub fn with_clock(cfg: TelemetryConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        cfg.validate()?;

        let registry = Arc::new(InMemoryRegistry::new());
        let publisher = EventPublisher::new();

        let backend: Arc<dyn Registry> = registry.clone();
        publisher.register(Arc::new(TelemetryListener::new(backend, clock)));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                publisher,
            }),
        })
    }

    pub fn cfg(&self) -> &TelemetryConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &InMemoryRegistry {
        &self.inner.registry
    }

    pub fn publisher(&self) -> &EventPublisher {
        &self.inner.publisher
    }
}
