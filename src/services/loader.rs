//! Resource Loader
//!
//! Async work started when a card is attached. Results are posted to the
//! card's mailbox through a [`MailboxGate`]; failures are logged here and
//! never posted.
//!
//! The stylesheet and the device registry are fetched concurrently. History is
//! requested only once the registry answered, so the registry snapshot always
//! reaches the mailbox before the history it is needed for.

use crossbeam_channel::Sender;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::eventing::CardMessage;
use crate::services::host::{EventCallback, LIVE_CHANNELS, TimelineHost};
use crate::services::resolver::DeviceNameResolver;

/// Mailbox entrance shared by a card and its loader tasks.
///
/// Once closed, nothing else reaches the mailbox: `post` hands the message
/// back instead. Checking the flag and sending happen under one lock, so a
/// message is either queued before `close` returns or handed back.
#[derive(Clone, Debug)]
pub struct MailboxGate {
    mailbox: Sender<CardMessage>,
    closed: Arc<Mutex<bool>>,
}

impl MailboxGate {
    pub fn new(mailbox: Sender<CardMessage>) -> Self {
        Self {
            mailbox,
            closed: Arc::new(Mutex::new(false)),
        }
    }

    /// Queue `message`, or hand it back if the gate is closed or the card is gone
    pub fn post(&self, message: CardMessage) -> Result<(), CardMessage> {
        let closed = lock(&self.closed);
        if *closed {
            return Err(message);
        }
        self.mailbox.send(message).map_err(|e| e.0)
    }

    pub fn close(&self) {
        *lock(&self.closed) = true;
    }

    pub fn is_closed(&self) -> bool {
        *lock(&self.closed)
    }
}

fn lock(flag: &Mutex<bool>) -> MutexGuard<'_, bool> {
    flag.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Fetch stylesheet, registry and history for a card
pub async fn load_resources<H: TimelineHost>(host: Arc<H>, hours_back: u32, gate: MailboxGate) {
    let (stylesheet, registry) =
        futures::join!(host.fetch_stylesheet(), DeviceNameResolver::fetch(&*host));

    match stylesheet {
        Ok(css) => post(&gate, CardMessage::StylesheetLoaded { css }),
        Err(e) => tracing::error!("Unable to load card CSS file: {}", e),
    }

    match registry {
        Ok(resolver) => {
            tracing::info!("Loaded {} device names", resolver.len());
            post(&gate, CardMessage::RegistryLoaded { resolver });
        }
        Err(e) => tracing::error!("Unable to load device registry: {}", e),
    }

    if gate.is_closed() {
        tracing::debug!("Card detached, skipping history query");
        return;
    }

    match host.fetch_historical_events(hours_back).await {
        Ok(events) => {
            tracing::info!("Loaded {} history events ({}h)", events.len(), hours_back);
            post(&gate, CardMessage::HistoryLoaded { events });
        }
        Err(e) => tracing::error!("Unable to load Device Pulse events: {}", e),
    }
}

/// Subscribe to both live channels. Each callback forwards into the mailbox
/// until the gate closes.
pub async fn subscribe_live<H: TimelineHost>(host: Arc<H>, gate: MailboxGate) {
    for (event_type, kind) in LIVE_CHANNELS {
        if gate.is_closed() {
            tracing::debug!("Card detached, not subscribing to {}", event_type);
            return;
        }

        let forward = gate.clone();
        let callback: EventCallback = Arc::new(move |data| {
            if forward.post(CardMessage::LiveEvent { kind, data }).is_err() {
                tracing::debug!("Dropping {} event: card is detached", kind.as_str());
            }
        });

        match host.subscribe(event_type, callback).await {
            Ok(handle) => {
                tracing::info!("Subscribed to {}", event_type);
                post(&gate, CardMessage::Subscribed { handle });
            }
            Err(e) => tracing::error!("Unable to subscribe to events: {}", e),
        }
    }
}

/// A message handed back by a closed gate is dropped here; a subscription
/// handle inside it is released on drop.
fn post(gate: &MailboxGate, message: CardMessage) {
    if let Err(message) = gate.post(message) {
        match message {
            CardMessage::Subscribed { mut handle } => {
                handle.release();
                tracing::debug!("Card detached, released subscription to {}", handle.event_type());
            }
            other => tracing::debug!("Card detached, dropping {}", other.name()),
        }
    }
}
