//! CardMessage - Timeline Card Mailbox
//!
//! Everything that reaches a card after construction arrives as one of these
//! messages: loader completions, live events and width samples.

use crate::domain::{EventKind, LiveEventData, RawEvent};
use crate::services::{DeviceNameResolver, SubscriptionHandle};

/// Messages consumed by [`crate::features::timeline::TimelineCard`]
#[derive(Debug)]
pub enum CardMessage {
    /// Card stylesheet fetched
    StylesheetLoaded { css: String },

    /// Device registry snapshot built
    RegistryLoaded { resolver: DeviceNameResolver },

    /// History query answered
    HistoryLoaded { events: Vec<RawEvent> },

    /// A live subscription is active; the card now owns its handle
    Subscribed { handle: SubscriptionHandle },

    /// Live event pushed on the channel for `kind`
    LiveEvent { kind: EventKind, data: LiveEventData },

    /// Rendered width changed
    Resized { width: f32 },
}

impl CardMessage {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            CardMessage::StylesheetLoaded { .. } => "stylesheet_loaded",
            CardMessage::RegistryLoaded { .. } => "registry_loaded",
            CardMessage::HistoryLoaded { .. } => "history_loaded",
            CardMessage::Subscribed { .. } => "subscribed",
            CardMessage::LiveEvent { .. } => "live_event",
            CardMessage::Resized { .. } => "resized",
        }
    }
}
