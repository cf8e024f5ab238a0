//! In-memory [`Registry`] implementation.
//!
//! Counters are cached per [`MetricId`] in a `DashMap`, so repeated requests for
//! the same (name, tags) pair share one atomic. Ids keep their tags sorted,
//! which keeps rendering deterministic within a series.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use keel_telemetry_core::metrics::{Counter, MetricId, Registry, Tag};
use keel_telemetry_core::Result;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// `keel.resource.checked` -> `keel_resource_checked_total`.
fn exposition_name(name: &str) -> String {
    let base: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("{base}_total")
}

pub struct AtomicCounter {
    id: MetricId,
    value: AtomicU64,
}

impl AtomicCounter {
    fn new(id: MetricId) -> Self {
        Self {
            id,
            value: AtomicU64::new(0),
        }
    }
}

impl Counter for AtomicCounter {
    fn id(&self) -> &MetricId {
        &self.id
    }

    fn increment(&self) -> Result<()> {
        self.value.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn count(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
pub struct InMemoryRegistry {
    counters: DashMap<MetricId, Arc<AtomicCounter>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every counter and its current value, sorted by name then tags.
    pub fn counters(&self) -> Vec<(MetricId, u64)> {
        let mut out: Vec<(MetricId, u64)> = self
            .counters
            .iter()
            .map(|r| (r.key().clone(), r.value().count()))
            .collect();
        out.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()).then_with(|| a.tags().cmp(b.tags())));
        out
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut last_name: Option<String> = None;

        for (id, val) in self.counters() {
            let name = exposition_name(id.name());
            if last_name.as_deref() != Some(name.as_str()) {
                let _ = writeln!(out, "# TYPE {} counter", name);
                last_name = Some(name.clone());
            }
            let label_str = id
                .tags()
                .iter()
                .map(|t| format!("{}=\"{}\"", t.key(), escape_label(t.value())))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
        out
    }
}

impl Registry for InMemoryRegistry {
    fn counter(&self, name: &str, tags: &[Tag]) -> Result<Arc<dyn Counter>> {
        let id = self.create_id(name, tags);
        let counter: Arc<dyn Counter> = self
            .counters
            .entry(id.clone())
            .or_insert_with(|| Arc::new(AtomicCounter::new(id)))
            .value()
            .clone();
        Ok(counter)
    }
}
