//! Fake registries shared by listener and publisher tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use keel_telemetry_core::clock::FixedClock;
use keel_telemetry_core::error::{Result, TelemetryError};
use keel_telemetry_core::event::ResourceLifecycleEvent;
use keel_telemetry_core::metrics::{Counter, MetricId, Registry, Tag};

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()))
}

pub fn cluster_event() -> ResourceLifecycleEvent {
    ResourceLifecycleEvent::valid(
        "ec2/cluster@v1".parse().unwrap(),
        "ec2:cluster:prod:keel-main",
        1,
        "fnord",
        Utc::now(),
    )
}

/// What a counter does when incremented.
#[derive(Clone, Copy)]
pub enum Behaviour {
    Count,
    Fail,
    Panic,
}

pub struct FakeCounter {
    id: MetricId,
    behaviour: Behaviour,
    pub increments: AtomicU64,
}

impl Counter for FakeCounter {
    fn id(&self) -> &MetricId {
        &self.id
    }

    fn increment(&self) -> Result<()> {
        match self.behaviour {
            Behaviour::Count => {
                self.increments.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Behaviour::Fail => Err(TelemetryError::Registry("Somebody set up us the bomb".into())),
            Behaviour::Panic => panic!("Somebody set up us the bomb"),
        }
    }

    fn count(&self) -> u64 {
        self.increments.load(Ordering::SeqCst)
    }
}

/// Records every `counter` call and hands back a fresh fake counter each time.
pub struct RecordingRegistry {
    acquire: Option<Behaviour>,
    increment: Behaviour,
    pub calls: Mutex<Vec<(String, Vec<Tag>)>>,
    pub handles: Mutex<Vec<Arc<FakeCounter>>>,
}

impl RecordingRegistry {
    pub fn counting() -> Self {
        Self::new(None, Behaviour::Count)
    }

    /// Counter acquisition itself misbehaves.
    pub fn failing_acquire(behaviour: Behaviour) -> Self {
        Self::new(Some(behaviour), Behaviour::Count)
    }

    /// Acquisition succeeds; `increment` misbehaves.
    pub fn failing_increment(behaviour: Behaviour) -> Self {
        Self::new(None, behaviour)
    }

    fn new(acquire: Option<Behaviour>, increment: Behaviour) -> Self {
        Self {
            acquire,
            increment,
            calls: Mutex::new(Vec::new()),
            handles: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<Tag>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn total_increments(&self) -> u64 {
        self.handles.lock().unwrap().iter().map(|c| c.count()).sum()
    }
}

impl Registry for RecordingRegistry {
    fn counter(&self, name: &str, tags: &[Tag]) -> Result<Arc<dyn Counter>> {
        self.calls.lock().unwrap().push((name.to_string(), tags.to_vec()));

        match self.acquire {
            Some(Behaviour::Fail) => {
                return Err(TelemetryError::Registry("backend unavailable".into()))
            }
            Some(Behaviour::Panic) => panic!("backend client blew up"),
            _ => {}
        }

        let counter = Arc::new(FakeCounter {
            id: self.create_id(name, tags),
            behaviour: self.increment,
            increments: AtomicU64::new(0),
        });
        self.handles.lock().unwrap().push(Arc::clone(&counter));
        Ok(counter)
    }
}
