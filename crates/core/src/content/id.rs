//! Content identifiers and the generators that mint them.
//!
//! An id is assigned once when an entity is created and never changes.
//! Seed entries carry short numeric ids (`"1"`..`"6"`). Neither generator
//! produces that shape with its default settings.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh, collision-free ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ContentId;
}

/// Random v4 UUIDs. The default for long-lived stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ContentId {
        ContentId(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter ids of the form `{prefix}{n}`, starting at 1.
///
/// Unique within one generator instance; useful where ids must be
/// predictable, such as tests and fixtures.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("seq-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ContentId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ContentId(format!("{}{n}", self.prefix))
    }
}
