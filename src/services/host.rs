//! Host Contract
//!
//! Everything the card needs from the home-automation host: the device
//! registry, the history query, live event subscriptions and the stylesheet.
//! Transport and authentication stay on the host side of this trait.

use std::future::Future;
use std::sync::Arc;

use crate::domain::{DeviceRegistryEntry, EventKind, LiveEventData, RawEvent};
use crate::constants::{EVENT_DEVICE_OFFLINE, EVENT_DEVICE_ONLINE};
use crate::error::Result;
use crate::services::subscription::SubscriptionHandle;

/// Callback invoked by the host for each live event on a subscribed channel
pub type EventCallback = Arc<dyn Fn(LiveEventData) + Send + Sync + 'static>;

/// Host services consumed by the timeline card
pub trait TimelineHost: Send + Sync + 'static {
    /// Full device registry
    fn fetch_device_registry(&self) -> impl Future<Output = Result<Vec<DeviceRegistryEntry>>> + Send;

    /// Connectivity events of the last `hours_back` hours
    fn fetch_historical_events(
        &self,
        hours_back: u32,
    ) -> impl Future<Output = Result<Vec<RawEvent>>> + Send;

    /// Subscribe `callback` to a host event type
    fn subscribe(
        &self,
        event_type: &str,
        callback: EventCallback,
    ) -> impl Future<Output = Result<SubscriptionHandle>> + Send;

    /// Card stylesheet (decorative)
    fn fetch_stylesheet(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Live channels the card listens on, with the kind each one carries
pub const LIVE_CHANNELS: [(&str, EventKind); 2] = [
    (EVENT_DEVICE_ONLINE, EventKind::Connected),
    (EVENT_DEVICE_OFFLINE, EventKind::Disconnected),
];
