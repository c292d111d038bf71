//! Subscription Handles
//!
//! A live event subscription is released by calling its unsubscribe closure.
//! Handles make that call happen at most once, whether the owner releases the
//! handle explicitly, releases it twice, or just drops it.

use std::sync::Arc;

type Unsubscribe = Box<dyn FnOnce() + Send + 'static>;

/// Owner of one host subscription
pub struct SubscriptionHandle {
    event_type: Arc<str>,
    unsubscribe: Option<Unsubscribe>,
}

impl SubscriptionHandle {
    /// Wrap the host's unsubscribe closure
    pub fn new(event_type: impl Into<Arc<str>>, unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            event_type: event_type.into(),
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Event type this handle is subscribed to
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Whether the subscription has not been released yet
    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Release the subscription. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        match self.unsubscribe.take() {
            Some(unsubscribe) => {
                unsubscribe();
                tracing::debug!("Released subscription to {}", self.event_type);
                true
            }
            None => false,
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("event_type", &self.event_type)
            .field("active", &self.is_active())
            .finish()
    }
}
