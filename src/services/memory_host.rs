//! In-Memory Host
//!
//! A [`TimelineHost`] backed by plain collections. Used by the demo binary and
//! by tests; every resource can be switched to fail on demand.

use ahash::AHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::constants::STYLESHEET_PATH;
use crate::domain::{DeviceRegistryEntry, LiveEventData, RawEvent};
use crate::error::{Error, Result};
use crate::services::host::{EventCallback, TimelineHost};
use crate::services::subscription::SubscriptionHandle;

type Subscribers = AHashMap<Uuid, (Arc<str>, EventCallback)>;

/// Host double holding registry, history and subscribers in memory
#[derive(Default)]
pub struct MemoryHost {
    registry: Mutex<Vec<DeviceRegistryEntry>>,
    history: Mutex<Vec<RawEvent>>,
    stylesheet: Mutex<String>,
    subscribers: Arc<Mutex<Subscribers>>,
    history_queries: Mutex<Vec<u32>>,
    fail_registry: AtomicBool,
    fail_history: AtomicBool,
    fail_stylesheet: AtomicBool,
    fail_subscribe: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_registry(&self, entries: Vec<DeviceRegistryEntry>) {
        *lock(&self.registry) = entries;
    }

    pub fn set_history(&self, events: Vec<RawEvent>) {
        *lock(&self.history) = events;
    }

    pub fn set_stylesheet(&self, css: impl Into<String>) {
        *lock(&self.stylesheet) = css.into();
    }

    pub fn fail_registry(&self, fail: bool) {
        self.fail_registry.store(fail, Ordering::SeqCst);
    }

    pub fn fail_history(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }

    pub fn fail_stylesheet(&self, fail: bool) {
        self.fail_stylesheet.store(fail, Ordering::SeqCst);
    }

    pub fn fail_subscribe(&self, fail: bool) {
        self.fail_subscribe.store(fail, Ordering::SeqCst);
    }

    /// `hours_back` values the history query was called with
    pub fn history_queries(&self) -> Vec<u32> {
        lock(&self.history_queries).clone()
    }

    /// Number of live subscribers for `event_type`
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        lock(&self.subscribers)
            .values()
            .filter(|(tag, _)| &**tag == event_type)
            .count()
    }

    /// Deliver a live event to every subscriber of `event_type`.
    /// Returns how many callbacks were invoked.
    pub fn emit(&self, event_type: &str, data: LiveEventData) -> usize {
        let callbacks: Vec<EventCallback> = lock(&self.subscribers)
            .values()
            .filter(|(tag, _)| &**tag == event_type)
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in &callbacks {
            callback(data.clone());
        }
        callbacks.len()
    }
}

impl TimelineHost for MemoryHost {
    async fn fetch_device_registry(&self) -> Result<Vec<DeviceRegistryEntry>> {
        if self.fail_registry.load(Ordering::SeqCst) {
            return Err(Error::ResourceLoad {
                resource: "device registry",
                message: "registry unavailable".to_string(),
            });
        }
        Ok(lock(&self.registry).clone())
    }

    async fn fetch_historical_events(&self, hours_back: u32) -> Result<Vec<RawEvent>> {
        lock(&self.history_queries).push(hours_back);
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(Error::ResourceLoad {
                resource: "history",
                message: "history query failed".to_string(),
            });
        }
        Ok(lock(&self.history).clone())
    }

    async fn subscribe(&self, event_type: &str, callback: EventCallback) -> Result<SubscriptionHandle> {
        if self.fail_subscribe.load(Ordering::SeqCst) {
            return Err(Error::Subscription {
                event_type: event_type.to_string(),
                message: "connection refused".to_string(),
            });
        }

        let id = Uuid::new_v4();
        let tag: Arc<str> = event_type.into();
        lock(&self.subscribers).insert(id, (tag.clone(), callback));

        let subscribers = self.subscribers.clone();
        Ok(SubscriptionHandle::new(tag, move || {
            lock(&subscribers).remove(&id);
        }))
    }

    async fn fetch_stylesheet(&self) -> Result<String> {
        if self.fail_stylesheet.load(Ordering::SeqCst) {
            return Err(Error::ResourceLoad {
                resource: "stylesheet",
                message: format!("{STYLESHEET_PATH} not found"),
            });
        }
        Ok(lock(&self.stylesheet).clone())
    }
}

impl std::fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHost")
            .field("devices", &lock(&self.registry).len())
            .field("history", &lock(&self.history).len())
            .field("subscribers", &lock(&self.subscribers).len())
            .finish()
    }
}
