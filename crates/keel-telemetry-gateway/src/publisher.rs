//! In-process fan-out of resource lifecycle events to registered listeners.

use std::sync::{Arc, RwLock};

use keel_telemetry_core::event::ResourceLifecycleEvent;

/// Consumer of "resource checked" events.
pub trait ResourceEventListener: Send + Sync {
    fn name(&self) -> &'static str;
    fn on_resource_checked(&self, event: &ResourceLifecycleEvent);
}

/// Delivers each published event to every listener, in registration order.
#[derive(Default)]
pub struct EventPublisher {
    listeners: RwLock<Vec<Arc<dyn ResourceEventListener>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn ResourceEventListener>) {
        tracing::debug!(listener = listener.name(), "registering resource event listener");
        // poisoning tolerated: listeners are only ever appended
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.push(listener);
    }

    pub fn registered(&self) -> Vec<&'static str> {
        let listeners = self.listeners.read().unwrap_or_else(|e| e.into_inner());
        listeners.iter().map(|l| l.name()).collect()
    }

    pub fn publish(&self, event: &ResourceLifecycleEvent) {
        let listeners: Vec<_> = {
            let guard = self.listeners.read().unwrap_or_else(|e| e.into_inner());
            guard.clone()
        };
        for listener in listeners {
            listener.on_resource_checked(event);
        }
    }
}
