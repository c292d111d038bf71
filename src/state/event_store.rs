//! EventStore - Timeline Records
//!
//! Holds every record of the session, newest first. History is loaded once in
//! bulk, live pushes are merged one at a time. Records are never removed.

use chrono::TimeZone;

use crate::domain::{DeviceId, EventRecord};

/// Newest-first collection of timeline records
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    records: Vec<EventRecord>,
    initialized: bool,
}

/// A record in display order, flagged when the next record falls on another day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarked<'a> {
    pub record: &'a EventRecord,
    /// The calendar date changes between this record and the next one
    pub day_boundary: bool,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store content with `records` sorted newest first.
    ///
    /// Records with equal timestamps keep their relative input order.
    pub fn load(&mut self, mut records: Vec<EventRecord>) {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.records = records;
        self.initialized = true;
    }

    /// Insert one record, keeping the store sorted.
    ///
    /// The record lands before existing records with the same timestamp, which
    /// is where a stable sort of `[record] ++ existing` would put it.
    pub fn merge(&mut self, record: EventRecord) {
        let at = self
            .records
            .partition_point(|existing| existing.timestamp > record.timestamp);
        self.records.insert(at, record);
    }

    /// Records of `device` (or all records) in store order
    pub fn filtered_view(&self, device: Option<&DeviceId>) -> Vec<&EventRecord> {
        match device {
            None => self.records.iter().collect(),
            Some(id) => self.records.iter().filter(|r| &r.device_id == id).collect(),
        }
    }

    /// All records, newest first
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Whether history has been loaded (even if it was empty)
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clear the fresh flag on every record. Returns how many were fresh.
    pub fn acknowledge_fresh(&mut self) -> usize {
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| r.is_fresh) {
            record.is_fresh = false;
            count += 1;
        }
        count
    }
}

/// Flag day transitions in `records` (already in display order) using the
/// calendar of `tz`.
pub fn day_boundaries_in<'a, Tz: TimeZone>(
    records: &[&'a EventRecord],
    tz: &Tz,
) -> Vec<DayMarked<'a>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let day_boundary = records
                .get(index + 1)
                .is_some_and(|next| next.date_in(tz) != record.date_in(tz));
            DayMarked {
                record: *record,
                day_boundary,
            }
        })
        .collect()
}
