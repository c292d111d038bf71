//! Card Registry
//!
//! Explicit registration of card types, done once at process start by the
//! embedding host.

use ahash::AHashMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::constants::{CARD_DESCRIPTION, CARD_DOCUMENTATION_URL, CARD_NAME, CARD_TYPE};
use crate::domain::WidgetConfig;
use crate::error::{Error, Result};
use crate::features::editor::ConfigEditor;
use crate::features::timeline::TimelineCard;
use crate::services::TimelineHost;

/// What the host's card picker shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: bool,
    #[serde(rename = "documentationURL")]
    pub documentation_url: &'static str,
}

/// Factories for one card type
pub struct CardRegistration<H: TimelineHost> {
    pub descriptor: CardDescriptor,
    pub stub_config: fn() -> WidgetConfig,
    pub create_card: fn(Arc<H>, &Value) -> Result<TimelineCard<H>>,
    pub create_editor: fn() -> ConfigEditor,
}

impl<H: TimelineHost> std::fmt::Debug for CardRegistration<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRegistration")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Registered card types, keyed by type name
pub struct CardRegistry<H: TimelineHost> {
    cards: AHashMap<&'static str, CardRegistration<H>>,
    order: Vec<&'static str>,
}

impl<H: TimelineHost> Default for CardRegistry<H> {
    fn default() -> Self {
        Self {
            cards: AHashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<H: TimelineHost> CardRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: CardRegistration<H>) -> Result<()> {
        let type_name = registration.descriptor.type_name;
        if self.cards.contains_key(type_name) {
            return Err(Error::DuplicateCard {
                type_name: type_name.to_string(),
            });
        }

        tracing::info!("Registered card type {}", type_name);
        self.cards.insert(type_name, registration);
        self.order.push(type_name);
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&CardRegistration<H>> {
        self.cards.get(type_name)
    }

    /// Descriptors in registration order
    pub fn descriptors(&self) -> Vec<&CardDescriptor> {
        self.order
            .iter()
            .filter_map(|name| self.cards.get(name))
            .map(|registration| &registration.descriptor)
            .collect()
    }

    /// Construct a card of `type_name` from raw host settings
    pub fn create_card(
        &self,
        type_name: &str,
        host: Arc<H>,
        raw_config: &Value,
    ) -> Result<TimelineCard<H>> {
        let registration = self.get(type_name).ok_or_else(|| Error::UnknownCard {
            type_name: type_name.to_string(),
        })?;
        (registration.create_card)(host, raw_config)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Register the device pulse timeline card
pub fn register_timeline_card<H: TimelineHost>(registry: &mut CardRegistry<H>) -> Result<()> {
    registry.register(CardRegistration {
        descriptor: CardDescriptor {
            type_name: CARD_TYPE,
            name: CARD_NAME,
            description: CARD_DESCRIPTION,
            preview: true,
            documentation_url: CARD_DOCUMENTATION_URL,
        },
        stub_config: WidgetConfig::stub,
        create_card: TimelineCard::new,
        create_editor: ConfigEditor::new,
    })
}
