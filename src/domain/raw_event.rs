//! Raw Host Payloads
//!
//! Shapes of the data handed over by the host before normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event_record::EventKind;

/// Historical event as returned by the history query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawEvent {
    /// Kind discriminator ("connected" or "disconnected")
    pub event_type: String,
    pub device_id: String,
    #[serde(default)]
    pub disconnected_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reconnected_at: Option<DateTime<Utc>>,
}

/// Response envelope of the history query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub events: Option<Vec<RawEvent>>,
}

/// Payload of a live push; the kind comes from the channel it arrived on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveEventData {
    pub device_id: String,
    #[serde(default)]
    pub disconnected_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reconnected_at: Option<DateTime<Utc>>,
}

/// Device registry row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceRegistryEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Name assigned by the user, preferred over `name`
    #[serde(default)]
    pub name_by_user: Option<String>,
}

impl DeviceRegistryEntry {
    /// Display name for this device, if it has one
    pub fn display_name(&self) -> Option<&str> {
        self.name_by_user
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.name.as_deref().filter(|n| !n.is_empty()))
    }
}

/// Pick the timestamp field that matches the event kind
pub(crate) fn timestamp_for(
    kind: EventKind,
    disconnected_since: Option<DateTime<Utc>>,
    reconnected_at: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    match kind {
        EventKind::Disconnected => disconnected_since,
        EventKind::Connected => reconnected_at,
    }
}
