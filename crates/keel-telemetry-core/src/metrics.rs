//! Metrics registry capability.
//!
//! The listener never talks to a concrete backend. It asks a [`Registry`] for a
//! [`Counter`] handle keyed by (name, tags) and increments it. Backends are free
//! to cache handles for identical ids.

use std::sync::Arc;

use crate::error::Result;

/// Key/value label attached to a metric series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Identity of a metric series. Tags are kept sorted so ids built from the same
/// tag set in any order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricId {
    name: String,
    tags: Vec<Tag>,
}

impl MetricId {
    pub fn new(name: impl Into<String>, tags: &[Tag]) -> Self {
        let mut tags = tags.to_vec();
        tags.sort();
        Self {
            name: name.into(),
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Value of the tag named `key`, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.iter().find(|t| t.key == key).map(Tag::value)
    }
}

/// Monotonic counter handle.
pub trait Counter: Send + Sync {
    fn id(&self) -> &MetricId;
    /// Add one to the series.
    fn increment(&self) -> Result<()>;
    /// Current value as seen by this handle.
    fn count(&self) -> u64;
}

/// Metrics backend capability. Implementations must tolerate concurrent use.
pub trait Registry: Send + Sync {
    fn create_id(&self, name: &str, tags: &[Tag]) -> MetricId {
        MetricId::new(name, tags)
    }

    /// Get or create the counter for (name, tags).
    fn counter(&self, name: &str, tags: &[Tag]) -> Result<Arc<dyn Counter>>;
}

/// Registry that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRegistry;

struct NoopCounter {
    id: MetricId,
}

impl Counter for NoopCounter {
    fn id(&self) -> &MetricId {
        &self.id
    }
    fn increment(&self) -> Result<()> {
        Ok(())
    }
    fn count(&self) -> u64 {
        0
    }
}

impl Registry for NoopRegistry {
    fn counter(&self, name: &str, tags: &[Tag]) -> Result<Arc<dyn Counter>> {
        Ok(Arc::new(NoopCounter {
            id: self.create_id(name, tags),
        }))
    }
}
