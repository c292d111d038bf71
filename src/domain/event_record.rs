//! EventRecord - Normalized Connectivity Event

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Unique identifier for a device
#[derive(Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub Arc<str>);

impl DeviceId {
    /// Create a new DeviceId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connectivity transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Device came (back) online
    Connected,
    /// Device went offline
    Disconnected,
}

impl EventKind {
    /// Wire discriminator used by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Connected => "connected",
            EventKind::Disconnected => "disconnected",
        }
    }

    /// Status label shown next to the event time
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Connected => "Connected",
            EventKind::Disconnected => "Disconnected",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "connected" => Ok(EventKind::Connected),
            "disconnected" => Ok(EventKind::Disconnected),
            other => Err(crate::error::Error::InvalidEvent {
                message: format!("unknown event type '{other}'"),
            }),
        }
    }
}

/// A single entry of the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub kind: EventKind,
    pub device_id: DeviceId,
    /// Display name, resolved once when the record was created
    pub device_name: Arc<str>,
    /// Instant of the connection or disconnection
    pub timestamp: DateTime<Utc>,
    /// Arrived through a live subscription and not rendered yet
    pub is_fresh: bool,
}

impl EventRecord {
    /// Calendar date of the event in the given time zone
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.timestamp.with_timezone(tz).date_naive()
    }
}
