#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::sync::{Arc, Mutex};

use keel_telemetry_core::event::ResourceLifecycleEvent;
use keel_telemetry_gateway::{EventPublisher, ResourceEventListener, TelemetryListener};

use support::{cluster_event, fixed_clock, Behaviour, RecordingRegistry};

struct Journal {
    name: &'static str,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ResourceEventListener for Journal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn on_resource_checked(&self, event: &ResourceLifecycleEvent) {
        self.seen.lock().unwrap().push(format!("{}:{}", self.name, event.id()));
    }
}

#[test]
fn delivers_to_every_listener_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let publisher = EventPublisher::new();
    publisher.register(Arc::new(Journal { name: "first", seen: seen.clone() }));
    publisher.register(Arc::new(Journal { name: "second", seen: seen.clone() }));

    publisher.publish(&cluster_event());

    assert_eq!(publisher.registered(), vec!["first", "second"]);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            "first:ec2:cluster:prod:keel-main".to_string(),
            "second:ec2:cluster:prod:keel-main".to_string(),
        ]
    );
}

#[test]
fn failing_telemetry_does_not_starve_later_listeners() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let registry = Arc::new(RecordingRegistry::failing_increment(Behaviour::Panic));

    let publisher = EventPublisher::new();
    publisher.register(Arc::new(TelemetryListener::new(registry.clone(), fixed_clock())));
    publisher.register(Arc::new(Journal { name: "after", seen: seen.clone() }));

    publisher.publish(&cluster_event());

    assert_eq!(registry.calls().len(), 1);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn publishing_without_listeners_is_a_noop() {
    EventPublisher::new().publish(&cluster_event());
}
