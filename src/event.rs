//! Timestamped events that sort chronologically.

use serde::Serialize;
use std::cmp::Ordering;
use std::time::SystemTime;

/// A named message recorded at a point in time.
///
/// Events order by `timestamp`. Events with equal timestamps fall back to
/// `name` and then `message`, so ordering agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    pub timestamp: SystemTime,
    pub name: String,
    pub message: String,
}

impl Event {
    pub fn new(timestamp: SystemTime, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an event stamped with the current time.
    pub fn now(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(SystemTime::now(), name, message)
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
