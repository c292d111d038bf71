//! Timeline View Model
//!
//! Pure data handed to the rendering layer. Building a view never mutates the
//! event store; the card acknowledges fresh records separately.

use chrono::{DateTime, TimeZone};
use std::sync::Arc;

use crate::domain::{DeviceId, EventKind, EventRecord, Orientation, WidgetConfig};
use crate::state::{EventStore, InteractionState, LayoutState, day_boundaries_in};
use crate::utils::format::{
    format_empty_state, format_event_time, format_timeline_date, format_window,
};

/// How far the horizontal track is shifted so the newest marker stays aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftHint {
    #[default]
    None,
    Single,
    Double,
}

impl ShiftHint {
    /// Newest disconnection shifts twice, a disconnection right behind it once
    fn for_events(orientation: Orientation, events: &[&EventRecord]) -> Self {
        if orientation != Orientation::Horizontal {
            return ShiftHint::None;
        }
        let is_disconnect = |index: usize| {
            events
                .get(index)
                .is_some_and(|e| e.kind == EventKind::Disconnected)
        };
        if is_disconnect(0) {
            ShiftHint::Double
        } else if is_disconnect(1) {
            ShiftHint::Single
        } else {
            ShiftHint::None
        }
    }
}

/// One event on the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    pub kind: EventKind,
    pub device_id: DeviceId,
    pub device_name: Arc<str>,
    /// Local time, `HH:MM`
    pub time: String,
    /// "Connected" or "Disconnected"
    pub status: &'static str,
    pub highlighted: bool,
    /// Play the fade-in affordance
    pub fresh: bool,
    /// Day label placed after this entry (last entry of a day)
    pub date_marker: Option<String>,
}

/// Timeline body
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineBody {
    /// History not loaded (yet or ever): render nothing
    NotLoaded,
    /// History loaded, nothing to show
    Empty { message: String },
    Entries(Vec<ViewEntry>),
}

/// Everything the rendering layer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub title: String,
    pub subtitle: String,
    pub orientation: Orientation,
    pub device_name_clip: bool,
    /// A device is highlighted; other entries are dimmed
    pub highlighting: bool,
    pub shift: ShiftHint,
    pub stylesheet: Option<Arc<str>>,
    pub body: TimelineBody,
}

impl TimelineView {
    /// Build a view. `now` sets both the display time zone and "today".
    pub fn build<Tz: TimeZone>(
        config: &WidgetConfig,
        store: &EventStore,
        layout: &LayoutState,
        interaction: &InteractionState,
        stylesheet: Option<Arc<str>>,
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let tz = now.timezone();
        let today = now.date_naive();
        let orientation = layout.effective_orientation(config);
        let events = store.filtered_view(interaction.filter());

        let body = if events.is_empty() {
            if store.is_initialized() {
                TimelineBody::Empty {
                    message: format_empty_state(config.hours_back),
                }
            } else {
                TimelineBody::NotLoaded
            }
        } else {
            let last = events.len() - 1;
            let entries = day_boundaries_in(&events, &tz)
                .into_iter()
                .enumerate()
                .map(|(index, marked)| {
                    let record = marked.record;
                    let date_marker = (marked.day_boundary || index == last)
                        .then(|| format_timeline_date(record.date_in(&tz), today));
                    ViewEntry {
                        kind: record.kind,
                        device_id: record.device_id.clone(),
                        device_name: record.device_name.clone(),
                        time: format_event_time(&record.timestamp.with_timezone(&tz)),
                        status: record.kind.label(),
                        highlighted: interaction.is_highlighted(&record.device_id),
                        fresh: record.is_fresh,
                        date_marker,
                    }
                })
                .collect();
            TimelineBody::Entries(entries)
        };

        Self {
            title: config.title.clone(),
            subtitle: format_window(config.hours_back),
            orientation,
            device_name_clip: config.device_name_clip,
            highlighting: interaction.highlight().is_some(),
            shift: ShiftHint::for_events(orientation, &events),
            stylesheet,
            body,
        }
    }

    /// Entries, empty for the not-loaded and empty states
    pub fn entries(&self) -> &[ViewEntry] {
        match &self.body {
            TimelineBody::Entries(entries) => entries,
            _ => &[],
        }
    }
}
