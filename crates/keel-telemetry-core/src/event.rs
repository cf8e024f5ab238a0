//! Resource lifecycle events.
//!
//! Events are produced by the resource-checking pipeline every time a managed
//! resource's state is (re)computed. They are immutable once built: fields are
//! private and only exposed through accessors.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};

/// Schema identifier of a resource, written `group/singular@version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKind {
    group: String,
    singular: String,
    version: String,
}

impl ResourceKind {
    pub fn new(
        group: impl Into<String>,
        singular: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            singular: singular.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }
    pub fn singular(&self) -> &str {
        &self.singular
    }
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl FromStr for ResourceKind {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || TelemetryError::BadRequest(format!("invalid resource kind: {s:?}"));

        let (group, rest) = s.split_once('/').ok_or_else(bad)?;
        let (singular, version) = rest.split_once('@').ok_or_else(bad)?;

        if [group, singular, version]
            .iter()
            .any(|part| part.is_empty() || part.contains(['/', '@']))
        {
            return Err(bad());
        }
        Ok(Self::new(group, singular, version))
    }
}

impl TryFrom<String> for ResourceKind {
    type Error = TelemetryError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.group, self.singular, self.version)
    }
}

/// Outcome of a resource check (stable names, used as metric tag values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    /// Actual state matches desired state.
    Valid,
    /// Desired state could not be satisfied as declared.
    Invalid,
    /// Actual state drifted from desired state.
    Diff,
    /// Resource does not exist yet.
    Missing,
    /// The check itself failed.
    Error,
    Unknown,
}

impl ResourceState {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceState::Valid => "VALID",
            ResourceState::Invalid => "INVALID",
            ResourceState::Diff => "DIFF",
            ResourceState::Missing => "MISSING",
            ResourceState::Error => "ERROR",
            ResourceState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Resource was checked" notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceLifecycleEvent {
    kind: ResourceKind,
    id: String,
    version: u64,
    application: String,
    timestamp: DateTime<Utc>,
    state: ResourceState,
}

impl ResourceLifecycleEvent {
    pub fn new(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
        state: ResourceState,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            version,
            application: application.into(),
            timestamp,
            state,
        }
    }

    /// Resource matches its desired state.
    pub fn valid(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(kind, id, version, application, timestamp, ResourceState::Valid)
    }

    pub fn invalid(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(kind, id, version, application, timestamp, ResourceState::Invalid)
    }

    /// Drift between desired and actual state was detected.
    pub fn delta_detected(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(kind, id, version, application, timestamp, ResourceState::Diff)
    }

    pub fn missing(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(kind, id, version, application, timestamp, ResourceState::Missing)
    }

    /// The check could not be completed.
    pub fn check_error(
        kind: ResourceKind,
        id: impl Into<String>,
        version: u64,
        application: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(kind, id, version, application, timestamp, ResourceState::Error)
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn application(&self) -> &str {
        &self.application
    }
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
    pub fn state(&self) -> ResourceState {
        self.state
    }
}
