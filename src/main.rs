//! Device Pulse Timeline - Demo Entry Point
//!
//! Attaches a timeline card to an in-memory host, feeds it live events and
//! width samples, and logs the resulting view.
//!
//! Usage: `device-pulse-timeline [config.toml|config.json]`

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{Duration as Span, Utc};
use serde_json::json;

use device_pulse_timeline::app::{CardRegistry, register_timeline_card};
use device_pulse_timeline::constants::{CARD_TYPE, EVENT_DEVICE_OFFLINE, EVENT_DEVICE_ONLINE};
use device_pulse_timeline::domain::{DeviceRegistryEntry, LiveEventData, RawEvent};
use device_pulse_timeline::features::editor::{SchemaItem, field_label};
use device_pulse_timeline::features::timeline::{TimelineBody, TimelineView};
use device_pulse_timeline::services::MemoryHost;
use device_pulse_timeline::utils::config_file::load_card_config;

const LOAD_TIMEOUT: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Device Pulse Timeline demo...");

    let raw_config = match std::env::args().nth(1) {
        Some(path) => {
            load_card_config(&path).with_context(|| format!("loading card config {path}"))?
        }
        None => json!({ "responsive_orientation": true, "responsive_breakpoint": 480 }),
    };

    let host = Arc::new(demo_host());
    let mut registry = CardRegistry::<MemoryHost>::new();
    register_timeline_card(&mut registry)?;

    let mut card = registry.create_card(CARD_TYPE, host.clone(), &raw_config)?;
    card.attach();

    let ready = card.process_until(LOAD_TIMEOUT, |card| {
        card.store().is_initialized() && card.active_subscriptions() == 2
    });
    if !ready {
        tracing::warn!("Card did not finish loading within {:?}", LOAD_TIMEOUT);
    }
    log_view(&card.render());

    let now = Utc::now();
    host.emit(
        EVENT_DEVICE_OFFLINE,
        LiveEventData {
            device_id: "printer".to_string(),
            disconnected_since: Some(now),
            reconnected_at: None,
        },
    );
    host.emit(
        EVENT_DEVICE_ONLINE,
        LiveEventData {
            device_id: "tv".to_string(),
            disconnected_since: Some(now - Span::minutes(40)),
            reconnected_at: Some(now),
        },
    );

    if let Some(observer) = card.width_observer() {
        for width in [900.0, 420.0] {
            observer.report(width);
        }
    }

    let expected = card.store().len() + 2;
    card.process_until(LOAD_TIMEOUT, |card| card.store().len() >= expected);
    card.process_pending();
    log_view(&card.render());

    if let Some(tv) = card.store().records().first().map(|r| r.device_id.clone()) {
        card.click_event(&tv);
        card.filter_by_device(Some(tv));
        log_view(&card.render());
    }

    let registration = registry.get(CARD_TYPE).context("card type missing")?;
    let mut editor = (registration.create_editor)();
    editor.set_config(card.config().clone());
    let changes = editor.subscribe();
    editor.value_changed(&json!({ "orientation": "vertical", "device_name_clip": false }))?;
    for change in changes.try_iter() {
        let detail = change.detail()?;
        tracing::info!("Config changed: {}", detail);
        card.replace_config(change.config);
    }
    for field in SchemaItem::field_names(&editor.schema()) {
        tracing::info!("Editor field: {}", field_label(field).unwrap_or(field));
    }

    card.detach();
    tracing::info!(
        "Detached; {} subscribers left on host",
        host.subscriber_count(EVENT_DEVICE_ONLINE) + host.subscriber_count(EVENT_DEVICE_OFFLINE)
    );
    Ok(())
}

fn demo_host() -> MemoryHost {
    let host = MemoryHost::new();
    host.set_stylesheet(".device-pulse-timeline { display: flex; }");
    host.set_registry(vec![
        DeviceRegistryEntry {
            id: "tv".to_string(),
            name: Some("Smart TV".to_string()),
            name_by_user: Some("Living Room TV".to_string()),
        },
        DeviceRegistryEntry {
            id: "printer".to_string(),
            name: Some("Office Printer".to_string()),
            name_by_user: None,
        },
        DeviceRegistryEntry {
            id: "nas".to_string(),
            name: None,
            name_by_user: None,
        },
    ]);

    let now = Utc::now();
    host.set_history(vec![
        RawEvent {
            event_type: "disconnected".to_string(),
            device_id: "tv".to_string(),
            disconnected_since: Some(now - Span::hours(2)),
            reconnected_at: None,
        },
        RawEvent {
            event_type: "connected".to_string(),
            device_id: "nas".to_string(),
            disconnected_since: Some(now - Span::hours(30)),
            reconnected_at: Some(now - Span::hours(20)),
        },
        RawEvent {
            event_type: "disconnected".to_string(),
            device_id: "nas".to_string(),
            disconnected_since: Some(now - Span::hours(30)),
            reconnected_at: Some(now - Span::hours(20)),
        },
    ]);
    host
}

fn log_view(view: &TimelineView) {
    tracing::info!(
        "{} ({}), {} layout, shift {:?}",
        view.title,
        view.subtitle,
        view.orientation,
        view.shift
    );
    match &view.body {
        TimelineBody::NotLoaded => tracing::info!("  (not loaded)"),
        TimelineBody::Empty { message } => tracing::info!("  {}", message),
        TimelineBody::Entries(entries) => {
            for entry in entries {
                tracing::info!(
                    "  {} {:<16} {:<12}{}{}",
                    entry.time,
                    entry.device_name,
                    entry.status,
                    if entry.highlighted { " *" } else { "" },
                    if entry.fresh { " (new)" } else { "" },
                );
                if let Some(date) = &entry.date_marker {
                    tracing::info!("  -- {} --", date);
                }
            }
        }
    }
}
