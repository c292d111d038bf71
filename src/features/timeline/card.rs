//! Timeline Card
//!
//! The single owner of one card's state. Host callbacks, loader completions and
//! width samples never touch this state directly: they post [`CardMessage`]s to
//! the card's mailbox and the owner applies them in order.

use chrono::Local;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::constants::{CARD_SIZE, GRID_MIN_ROWS, GRID_ROWS, MAILBOX_BATCH_SIZE};
use crate::domain::{DeviceId, Orientation, WidgetConfig};
use crate::error::Result;
use crate::eventing::CardMessage;
use crate::services::runtime::spawn_named_in_tokio;
use crate::services::{
    DeviceNameResolver, EventNormalizer, MailboxGate, SubscriptionHandle, TimelineHost,
    load_resources, subscribe_live,
};
use crate::state::{EventStore, InteractionState, LayoutMode, LayoutState};

use super::view::TimelineView;

/// Card lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not attached to the host yet
    Created,
    /// Loading and listening
    Attached,
    /// Torn down; late completions are ignored
    Detached,
}

/// Grid sizing hints for the host layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOptions {
    pub rows: u32,
    pub min_rows: u32,
}

/// Feeds rendered widths into a card's mailbox until disconnected
#[derive(Clone, Debug)]
pub struct WidthObserver {
    mailbox: Sender<CardMessage>,
    connected: Arc<AtomicBool>,
}

impl WidthObserver {
    fn new(mailbox: Sender<CardMessage>) -> Self {
        Self {
            mailbox,
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Report a width sample. Returns `false` once the observer is disconnected.
    pub fn report(&self, width: f32) -> bool {
        if !self.is_connected() {
            return false;
        }
        self.mailbox.send(CardMessage::Resized { width }).is_ok()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

/// Device connectivity timeline card
pub struct TimelineCard<H: TimelineHost> {
    host: Arc<H>,
    config: WidgetConfig,
    store: EventStore,
    resolver: DeviceNameResolver,
    layout: LayoutState,
    interaction: InteractionState,
    stylesheet: Option<Arc<str>>,
    subscriptions: Vec<SubscriptionHandle>,
    width_observer: Option<WidthObserver>,
    lifecycle: Lifecycle,
    gate: MailboxGate,
    tx: Sender<CardMessage>,
    rx: Receiver<CardMessage>,
}

impl<H: TimelineHost> TimelineCard<H> {
    /// Create a card from raw host settings
    pub fn new(host: Arc<H>, raw_config: &Value) -> Result<Self> {
        let config = WidgetConfig::normalize_initial(raw_config)?;
        Ok(Self::with_config(host, config))
    }

    /// Create a card from an already normalized config
    pub fn with_config(host: Arc<H>, config: WidgetConfig) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            host,
            config,
            store: EventStore::new(),
            resolver: DeviceNameResolver::new(),
            layout: LayoutState::new(),
            interaction: InteractionState::new(),
            stylesheet: None,
            subscriptions: Vec::new(),
            width_observer: None,
            lifecycle: Lifecycle::Created,
            gate: MailboxGate::new(tx.clone()),
            tx,
            rx,
        }
    }

    /// Card size hint (rows of the masonry layout)
    pub fn card_size() -> u32 {
        CARD_SIZE
    }

    /// Grid layout hints
    pub fn grid_options() -> GridOptions {
        GridOptions {
            rows: GRID_ROWS,
            min_rows: GRID_MIN_ROWS,
        }
    }

    // ==================== Lifecycle ====================

    /// Start loading resources and subscribe to live events.
    ///
    /// Only the first call does anything; a detached card stays detached.
    pub fn attach(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            tracing::warn!("Timeline card already {:?}, ignoring attach", self.lifecycle);
            return;
        }

        tracing::info!(
            "Attaching timeline card '{}' ({}h window)",
            self.config.title,
            self.config.hours_back
        );
        self.lifecycle = Lifecycle::Attached;
        self.width_observer = Some(WidthObserver::new(self.tx.clone()));

        spawn_named_in_tokio(
            "timeline-load-resources",
            load_resources(self.host.clone(), self.config.hours_back, self.gate.clone()),
        );
        spawn_named_in_tokio(
            "timeline-subscribe-live",
            subscribe_live(self.host.clone(), self.gate.clone()),
        );
    }

    /// Release every subscription and stop observing the width. Idempotent.
    ///
    /// Closes the mailbox gate first, so subscriptions still in flight are
    /// released by the loader, then releases those already held or queued.
    /// Returns how many subscriptions were released here.
    pub fn detach(&mut self) -> usize {
        if self.lifecycle == Lifecycle::Detached {
            return 0;
        }
        let was_attached = self.lifecycle == Lifecycle::Attached;
        self.gate.close();

        let queued = self.rx.try_iter().filter_map(|message| match message {
            CardMessage::Subscribed { handle } => Some(handle),
            _ => None,
        });
        let released = self
            .subscriptions
            .drain(..)
            .chain(queued)
            .map(|mut handle| handle.release())
            .filter(|released| *released)
            .count();

        if let Some(observer) = self.width_observer.take() {
            observer.disconnect();
        }

        self.lifecycle = Lifecycle::Detached;
        if was_attached {
            tracing::info!("Detached timeline card, released {} subscriptions", released);
        }
        released
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_attached(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    /// Width observer for the rendering layer (only while attached)
    pub fn width_observer(&self) -> Option<WidthObserver> {
        self.width_observer.clone()
    }

    /// Sender side of the mailbox
    pub fn mailbox(&self) -> Sender<CardMessage> {
        self.tx.clone()
    }

    // ==================== Mailbox ====================

    /// Apply queued messages without blocking. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while applied < MAILBOX_BATCH_SIZE {
            match self.rx.try_recv() {
                Ok(message) => {
                    self.handle_message(message);
                    applied += 1;
                }
                Err(_) => break,
            }
        }
        applied
    }

    /// Apply messages until `done` holds or `timeout` elapses.
    /// Returns whether `done` held.
    pub fn process_until(&mut self, timeout: Duration, mut done: impl FnMut(&Self) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if done(self) {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.rx.recv_timeout(remaining) {
                Ok(message) => {
                    self.handle_message(message);
                    self.process_pending();
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return done(self);
                }
            }
        }
    }

    /// Apply one message
    pub fn handle_message(&mut self, message: CardMessage) {
        if self.lifecycle == Lifecycle::Detached {
            match message {
                CardMessage::Subscribed { mut handle } => {
                    handle.release();
                    tracing::debug!(
                        "Released late subscription to {} after detach",
                        handle.event_type()
                    );
                }
                other => tracing::debug!("Ignoring {} after detach", other.name()),
            }
            return;
        }

        match message {
            CardMessage::StylesheetLoaded { css } => {
                self.stylesheet = Some(css.into());
            }

            CardMessage::RegistryLoaded { resolver } => {
                self.resolver = resolver;
            }

            CardMessage::HistoryLoaded { events } => {
                // Live events that beat the history query stay on the timeline,
                // ahead of history records with the same timestamp
                let mut records = self.store.records().to_vec();
                records.extend(EventNormalizer::new(&self.resolver).historical_batch(&events));
                self.store.load(records);
                tracing::debug!("Timeline holds {} events", self.store.len());
            }

            CardMessage::Subscribed { handle } => {
                self.subscriptions.push(handle);
            }

            CardMessage::LiveEvent { kind, data } => {
                match EventNormalizer::new(&self.resolver).live(kind, &data) {
                    Ok(record) => {
                        tracing::debug!(
                            "{} {} at {}",
                            record.device_name,
                            kind.as_str(),
                            record.timestamp
                        );
                        self.store.merge(record);
                    }
                    Err(e) => tracing::warn!("Dropping live event for {}: {}", data.device_id, e),
                }
            }

            CardMessage::Resized { width } => {
                self.layout.observe(width, &self.config);
            }
        }
    }

    // ==================== Configuration ====================

    /// Replace the config with new raw host settings
    pub fn set_config(&mut self, raw_config: &Value) -> Result<()> {
        let config = WidgetConfig::normalize_initial(raw_config)?;
        self.replace_config(config);
        Ok(())
    }

    /// Replace the config wholesale (e.g. after an editor change)
    pub fn replace_config(&mut self, config: WidgetConfig) {
        self.config = config;
        self.layout.reevaluate(&self.config);
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    // ==================== Interaction ====================

    /// Click on an event's content area
    pub fn click_event(&mut self, device: &DeviceId) -> Option<&DeviceId> {
        self.interaction.toggle_highlight(device)
    }

    /// Show only `device` (or everything with `None`)
    pub fn filter_by_device(&mut self, device: Option<DeviceId>) {
        self.interaction.set_filter(device);
    }

    // ==================== Presentation ====================

    /// Orientation the rendering layer should use
    pub fn effective_orientation(&self) -> Orientation {
        self.layout.effective_orientation(&self.config)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// Build the view for one render pass and consume the fresh flags
    pub fn render(&mut self) -> TimelineView {
        let view = TimelineView::build(
            &self.config,
            &self.store,
            &self.layout,
            &self.interaction,
            self.stylesheet.clone(),
            &Local::now(),
        );
        self.store.acknowledge_fresh();
        view
    }

    // ==================== Getters ====================

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn resolver(&self) -> &DeviceNameResolver {
        &self.resolver
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// Number of live subscriptions currently held
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.iter().filter(|h| h.is_active()).count()
    }
}

impl<H: TimelineHost> Drop for TimelineCard<H> {
    fn drop(&mut self) {
        if self.lifecycle == Lifecycle::Attached {
            self.detach();
        }
    }
}

impl<H: TimelineHost> std::fmt::Debug for TimelineCard<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineCard")
            .field("title", &self.config.title)
            .field("lifecycle", &self.lifecycle)
            .field("events", &self.store.len())
            .field("subscriptions", &self.active_subscriptions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EVENT_DEVICE_OFFLINE, EVENT_DEVICE_ONLINE, UNKNOWN_DEVICE};
    use crate::domain::{DeviceRegistryEntry, EventKind, LiveEventData, RawEvent};
    use crate::features::timeline::TimelineBody;
    use crate::services::MemoryHost;
    use crate::services::runtime::block_on;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    const WAIT: Duration = Duration::from_secs(5);

    fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, hour, minute, 0)
            .single()
            .expect("timestamp")
    }

    fn host() -> Arc<MemoryHost> {
        let host = Arc::new(MemoryHost::new());
        host.set_stylesheet(".timeline {}");
        host.set_registry(vec![
            DeviceRegistryEntry {
                id: "tv".into(),
                name: Some("TV".into()),
                name_by_user: Some("Living Room TV".into()),
            },
            DeviceRegistryEntry {
                id: "nas".into(),
                name: Some("NAS".into()),
                name_by_user: None,
            },
        ]);
        host.set_history(vec![
            RawEvent {
                event_type: "disconnected".into(),
                device_id: "tv".into(),
                disconnected_since: Some(ts(8, 0)),
                reconnected_at: None,
            },
            RawEvent {
                event_type: "connected".into(),
                device_id: "nas".into(),
                disconnected_since: Some(ts(6, 0)),
                reconnected_at: Some(ts(9, 0)),
            },
        ]);
        host
    }

    fn live(device: &str, at: DateTime<Utc>) -> LiveEventData {
        LiveEventData {
            device_id: device.into(),
            disconnected_since: Some(at),
            reconnected_at: Some(at),
        }
    }

    fn loaded(card: &TimelineCard<MemoryHost>) -> bool {
        card.store().is_initialized() && card.active_subscriptions() == 2
    }

    #[test]
    fn test_attach_loads_history_and_subscribes() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({"hours_back": 12})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, loaded));

        let names: Vec<_> = card.store().records().iter().map(|r| &*r.device_name).collect();
        assert_eq!(names, vec!["NAS", "Living Room TV"]);
        assert_eq!(host.history_queries(), vec![12]);
        assert_eq!(card.stylesheet(), Some(".timeline {}"));
        assert_eq!(host.subscriber_count(EVENT_DEVICE_ONLINE), 1);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_OFFLINE), 1);
    }

    #[test]
    fn test_live_events_merge_in_order() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, loaded));

        host.emit(EVENT_DEVICE_ONLINE, live("tv", ts(10, 0)));
        host.emit(EVENT_DEVICE_OFFLINE, live("nas", ts(8, 30)));
        assert!(card.process_until(WAIT, |c| c.store().len() == 4));

        let order: Vec<_> = card
            .store()
            .records()
            .iter()
            .map(|r| (r.device_id.as_str(), r.kind, r.is_fresh))
            .collect();
        assert_eq!(
            order,
            vec![
                ("tv", EventKind::Connected, true),
                ("nas", EventKind::Connected, false),
                ("nas", EventKind::Disconnected, true),
                ("tv", EventKind::Disconnected, false),
            ]
        );

        let view = card.render();
        assert!(view.entries().iter().filter(|e| e.fresh).count() == 2);
        let view = card.render();
        assert!(view.entries().iter().all(|e| !e.fresh));
    }

    #[test]
    fn test_detach_releases_subscriptions_once_and_ignores_late_messages() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, loaded));
        let observer = card.width_observer().expect("observer");

        card.detach();
        card.detach();
        assert_eq!(card.lifecycle(), Lifecycle::Detached);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_ONLINE), 0);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_OFFLINE), 0);
        assert!(!observer.report(300.0));
        assert!(card.width_observer().is_none());

        let before = card.store().len();
        card.mailbox()
            .send(CardMessage::LiveEvent {
                kind: EventKind::Connected,
                data: live("tv", ts(11, 0)),
            })
            .expect("send");
        card.mailbox()
            .send(CardMessage::HistoryLoaded { events: Vec::new() })
            .expect("send");
        card.process_pending();
        assert_eq!(card.store().len(), before);
    }

    #[test]
    fn test_late_subscription_is_released() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.detach();

        let released = Arc::new(AtomicBool::new(false));
        let flag = released.clone();
        let handle = SubscriptionHandle::new(EVENT_DEVICE_ONLINE, move || {
            flag.store(true, Ordering::SeqCst);
        });
        card.handle_message(CardMessage::Subscribed { handle });
        assert!(released.load(Ordering::SeqCst));
        assert_eq!(card.active_subscriptions(), 0);
    }

    #[test]
    fn test_attach_twice_is_ignored() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        card.attach();
        assert!(card.process_until(WAIT, loaded));
        // Give a stray second loader time to show up
        std::thread::sleep(Duration::from_millis(100));
        card.process_pending();
        assert_eq!(host.history_queries().len(), 1);
        assert_eq!(card.active_subscriptions(), 2);

        card.detach();
        card.attach();
        assert_eq!(card.lifecycle(), Lifecycle::Detached);
    }

    #[test]
    fn test_history_failure_leaves_store_uninitialized() {
        let host = host();
        host.fail_history(true);
        host.fail_stylesheet(true);
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, |c| c.active_subscriptions() == 2
            && c.resolver().len() == 2));
        std::thread::sleep(Duration::from_millis(100));
        card.process_pending();

        assert!(!card.store().is_initialized());
        assert!(card.stylesheet().is_none());
        assert_eq!(card.render().body, TimelineBody::NotLoaded);
    }

    #[test]
    fn test_registry_failure_still_loads_history() {
        let host = host();
        host.fail_registry(true);
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, loaded));
        assert!(card
            .store()
            .records()
            .iter()
            .all(|r| &*r.device_name == UNKNOWN_DEVICE));
    }

    #[test]
    fn test_subscription_failure_keeps_history() {
        let host = host();
        host.fail_subscribe(true);
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, |c| c.store().is_initialized()));
        assert_eq!(card.store().len(), 2);
        assert_eq!(card.active_subscriptions(), 0);
    }

    #[test]
    fn test_live_event_before_history_survives_load() {
        let host = host();
        let mut card = TimelineCard::new(host, &json!({})).expect("card");
        card.handle_message(CardMessage::LiveEvent {
            kind: EventKind::Disconnected,
            data: live("tv", ts(7, 0)),
        });
        assert!(!card.store().is_initialized());

        card.handle_message(CardMessage::HistoryLoaded {
            events: vec![RawEvent {
                event_type: "connected".into(),
                device_id: "nas".into(),
                disconnected_since: None,
                reconnected_at: Some(ts(9, 0)),
            }],
        });
        assert!(card.store().is_initialized());
        assert_eq!(card.store().len(), 2);

        // Same timestamp: the live record stays ahead, as `merge` would place it
        card.handle_message(CardMessage::LiveEvent {
            kind: EventKind::Disconnected,
            data: live("tv", ts(9, 0)),
        });
        let mut tied = TimelineCard::new(self::host(), &json!({})).expect("card");
        tied.handle_message(CardMessage::LiveEvent {
            kind: EventKind::Disconnected,
            data: live("tv", ts(9, 0)),
        });
        tied.handle_message(CardMessage::HistoryLoaded {
            events: vec![RawEvent {
                event_type: "connected".into(),
                device_id: "nas".into(),
                disconnected_since: None,
                reconnected_at: Some(ts(9, 0)),
            }],
        });
        let order = |card: &TimelineCard<MemoryHost>| -> Vec<String> {
            card.store()
                .records()
                .iter()
                .map(|r| r.device_id.to_string())
                .collect()
        };
        assert_eq!(order(&tied), vec!["tv", "nas"]);
        assert_eq!(order(&card), vec!["tv", "nas", "tv"]);
    }

    #[test]
    fn test_detach_right_after_attach_leaves_no_subscribers() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        card.detach();

        // Let the loader tasks run to completion
        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(host.subscriber_count(EVENT_DEVICE_ONLINE), 0);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_OFFLINE), 0);

        assert_eq!(host.emit(EVENT_DEVICE_ONLINE, live("tv", ts(11, 0))), 0);
        assert_eq!(card.process_pending(), 0);
    }

    #[test]
    fn test_detach_releases_queued_subscriptions() {
        let host = host();
        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        for event_type in [EVENT_DEVICE_ONLINE, EVENT_DEVICE_OFFLINE] {
            let callback: crate::services::EventCallback = Arc::new(|_: LiveEventData| {});
            let handle = block_on(host.subscribe(event_type, callback)).expect("subscribe");
            card.mailbox()
                .send(CardMessage::Subscribed { handle })
                .expect("send");
        }

        assert_eq!(card.detach(), 2);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_ONLINE), 0);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_OFFLINE), 0);
        assert_eq!(card.detach(), 0);
    }

    #[test]
    fn test_drop_detaches_only_attached_cards() {
        let host = host();
        let never_attached = TimelineCard::new(host.clone(), &json!({})).expect("card");
        assert_eq!(never_attached.lifecycle(), Lifecycle::Created);
        drop(never_attached);

        let mut card = TimelineCard::new(host.clone(), &json!({})).expect("card");
        card.attach();
        assert!(card.process_until(WAIT, loaded));
        drop(card);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_ONLINE), 0);
        assert_eq!(host.subscriber_count(EVENT_DEVICE_OFFLINE), 0);
    }

    #[test]
    fn test_names_are_not_updated_retroactively() {
        let host = host();
        let mut card = TimelineCard::new(host, &json!({})).expect("card");

        card.handle_message(CardMessage::LiveEvent {
            kind: EventKind::Connected,
            data: live("tv", ts(9, 0)),
        });
        card.handle_message(CardMessage::RegistryLoaded {
            resolver: DeviceNameResolver::from_registry(vec![DeviceRegistryEntry {
                id: "tv".into(),
                name: Some("TV".into()),
                name_by_user: None,
            }]),
        });
        card.handle_message(CardMessage::LiveEvent {
            kind: EventKind::Connected,
            data: live("tv", ts(10, 0)),
        });

        let names: Vec<_> = card.store().records().iter().map(|r| &*r.device_name).collect();
        assert_eq!(names, vec!["TV", UNKNOWN_DEVICE]);
    }

    #[test]
    fn test_resize_and_config_drive_orientation() {
        let host = host();
        let mut card = TimelineCard::new(
            host,
            &json!({"responsive_orientation": true, "responsive_breakpoint": 480}),
        )
        .expect("card");

        card.handle_message(CardMessage::Resized { width: 479.0 });
        assert_eq!(card.effective_orientation(), Orientation::Vertical);
        card.handle_message(CardMessage::Resized { width: 480.0 });
        assert_eq!(card.effective_orientation(), Orientation::Horizontal);

        card.handle_message(CardMessage::Resized { width: 400.0 });
        assert_eq!(card.layout_mode(), LayoutMode::ForcedVertical);
        card.set_config(&json!({"responsive_orientation": false}))
            .expect("config");
        assert_eq!(card.layout_mode(), LayoutMode::Natural);
    }

    #[test]
    fn test_width_observer_posts_resizes() {
        let host = host();
        let mut card = TimelineCard::new(host, &json!({"responsive_breakpoint": 600})).expect("card");
        card.attach();
        let observer = card.width_observer().expect("observer");
        assert!(observer.report(500.0));
        assert!(card.process_until(WAIT, |c| c.layout_mode() == LayoutMode::ForcedVertical));
    }

    #[test]
    fn test_click_toggles_highlight() {
        let host = host();
        let mut card = TimelineCard::new(host, &json!({})).expect("card");
        let a = DeviceId::from("A");
        assert_eq!(card.click_event(&a), Some(&a));
        assert_eq!(card.click_event(&a), None);

        card.filter_by_device(Some(a.clone()));
        assert_eq!(card.interaction().filter(), Some(&a));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(TimelineCard::new(host(), &json!({"hours_back": 0})).is_err());
    }

    #[test]
    fn test_layout_hints() {
        assert_eq!(TimelineCard::<MemoryHost>::card_size(), 4);
        assert_eq!(
            TimelineCard::<MemoryHost>::grid_options(),
            GridOptions { rows: 4, min_rows: 4 }
        );
    }
}
