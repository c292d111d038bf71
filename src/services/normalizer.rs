//! EventRecord Normalizer
//!
//! Turns history rows and live pushes into [`EventRecord`]s. Device names are
//! looked up once, here, against the resolver snapshot of the moment.

use std::str::FromStr;
use std::sync::Arc;

use crate::constants::UNKNOWN_DEVICE;
use crate::domain::{DeviceId, EventKind, EventRecord, LiveEventData, RawEvent, timestamp_for};
use crate::error::{Error, Result};
use crate::services::resolver::DeviceNameResolver;

/// Normalizer bound to one resolver snapshot
#[derive(Debug, Clone, Copy)]
pub struct EventNormalizer<'a> {
    resolver: &'a DeviceNameResolver,
}

impl<'a> EventNormalizer<'a> {
    pub fn new(resolver: &'a DeviceNameResolver) -> Self {
        Self { resolver }
    }

    /// Normalize one history row. Historical records are never fresh.
    pub fn historical(&self, raw: &RawEvent) -> Result<EventRecord> {
        let kind = EventKind::from_str(&raw.event_type)?;
        let timestamp = timestamp_for(kind, raw.disconnected_since, raw.reconnected_at)
            .ok_or_else(|| missing_timestamp(kind, &raw.device_id))?;
        Ok(self.record(kind, &raw.device_id, timestamp, false))
    }

    /// Normalize a live push received on the channel for `kind`
    pub fn live(&self, kind: EventKind, data: &LiveEventData) -> Result<EventRecord> {
        let timestamp = timestamp_for(kind, data.disconnected_since, data.reconnected_at)
            .ok_or_else(|| missing_timestamp(kind, &data.device_id))?;
        Ok(self.record(kind, &data.device_id, timestamp, true))
    }

    /// Normalize a history batch, logging and skipping rows that do not parse
    pub fn historical_batch<'r>(&self, raws: impl IntoIterator<Item = &'r RawEvent>) -> Vec<EventRecord> {
        raws.into_iter()
            .filter_map(|raw| match self.historical(raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping history event for {}: {}", raw.device_id, e);
                    None
                }
            })
            .collect()
    }

    fn record(
        &self,
        kind: EventKind,
        device_id: &str,
        timestamp: chrono::DateTime<chrono::Utc>,
        is_fresh: bool,
    ) -> EventRecord {
        let device_id = DeviceId::new(device_id);
        let device_name = self
            .resolver
            .resolve(&device_id)
            .cloned()
            .unwrap_or_else(|| Arc::from(UNKNOWN_DEVICE));

        EventRecord {
            kind,
            device_id,
            device_name,
            timestamp,
            is_fresh,
        }
    }
}

fn missing_timestamp(kind: EventKind, device_id: &str) -> Error {
    let field = match kind {
        EventKind::Disconnected => "disconnected_since",
        EventKind::Connected => "reconnected_at",
    };
    Error::InvalidEvent {
        message: format!("{} event for {device_id} has no {field}", kind.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeviceRegistryEntry;
    use chrono::{TimeZone, Utc};

    fn resolver() -> DeviceNameResolver {
        DeviceNameResolver::from_registry(vec![DeviceRegistryEntry {
            id: "tv".into(),
            name: Some("TV".into()),
            name_by_user: Some("Living Room TV".into()),
        }])
    }

    #[test]
    fn test_historical_picks_timestamp_by_kind() {
        let resolver = resolver();
        let normalizer = EventNormalizer::new(&resolver);
        let down = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).single().expect("ts");
        let up = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).single().expect("ts");

        let raw = RawEvent {
            event_type: "disconnected".into(),
            device_id: "tv".into(),
            disconnected_since: Some(down),
            reconnected_at: Some(up),
        };
        let record = normalizer.historical(&raw).expect("record");
        assert_eq!(record.kind, EventKind::Disconnected);
        assert_eq!(record.timestamp, down);
        assert_eq!(&*record.device_name, "Living Room TV");
        assert!(!record.is_fresh);

        let raw = RawEvent {
            event_type: "connected".into(),
            ..raw
        };
        let record = normalizer.historical(&raw).expect("record");
        assert_eq!(record.kind, EventKind::Connected);
        assert_eq!(record.timestamp, up);
    }

    #[test]
    fn test_live_records_are_fresh_and_unknown_falls_back() {
        let resolver = resolver();
        let normalizer = EventNormalizer::new(&resolver);
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).single().expect("ts");

        let data = LiveEventData {
            device_id: "ghost".into(),
            disconnected_since: None,
            reconnected_at: Some(at),
        };
        let record = normalizer.live(EventKind::Connected, &data).expect("record");
        assert!(record.is_fresh);
        assert_eq!(&*record.device_name, UNKNOWN_DEVICE);
        assert_eq!(record.device_id.as_str(), "ghost");
    }

    #[test]
    fn test_rejects_bad_rows() {
        let resolver = DeviceNameResolver::new();
        let normalizer = EventNormalizer::new(&resolver);
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).single().expect("ts");

        let unknown_kind = RawEvent {
            event_type: "rebooted".into(),
            device_id: "a".into(),
            disconnected_since: Some(at),
            reconnected_at: None,
        };
        assert!(normalizer.historical(&unknown_kind).is_err());

        let missing = RawEvent {
            event_type: "connected".into(),
            device_id: "a".into(),
            disconnected_since: Some(at),
            reconnected_at: None,
        };
        assert!(normalizer.historical(&missing).is_err());

        let good = RawEvent {
            event_type: "disconnected".into(),
            ..missing.clone()
        };
        let batch = normalizer.historical_batch(&[unknown_kind, missing, good]);
        assert_eq!(batch.len(), 1);
    }
}
