//! Config Editor
//!
//! Backs the card's configuration panel. Each edit is merged into the current
//! config, normalized, and announced once as a [`ConfigChanged`].

use crossbeam_channel::{Receiver, Sender};
use serde_json::Value;

use crate::domain::WidgetConfig;
use crate::error::Result;
use crate::eventing::ConfigChanged;

use super::schema::{SchemaItem, editor_schema};

#[derive(Debug, Default)]
pub struct ConfigEditor {
    config: Option<WidgetConfig>,
    listeners: Vec<Sender<ConfigChanged>>,
}

impl ConfigEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config handed over by the host when the panel opens (or after it
    /// persisted a change)
    pub fn set_config(&mut self, config: WidgetConfig) {
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&WidgetConfig> {
        self.config.as_ref()
    }

    /// Form schema for the current config; empty until a config is set
    pub fn schema(&self) -> Vec<SchemaItem> {
        self.config.as_ref().map(editor_schema).unwrap_or_default()
    }

    /// Receive a [`ConfigChanged`] for every accepted edit
    pub fn subscribe(&mut self) -> Receiver<ConfigChanged> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.listeners.push(tx);
        rx
    }

    /// Apply one form edit.
    ///
    /// Returns `Ok(None)` when no config has been set yet. Rejected patches
    /// leave the current config untouched and notify nobody.
    pub fn value_changed(&mut self, patch: &Value) -> Result<Option<ConfigChanged>> {
        let Some(current) = self.config.as_ref() else {
            tracing::debug!("Ignoring config edit before the editor has a config");
            return Ok(None);
        };

        let config = WidgetConfig::apply_edit(current, patch)?;
        let event = ConfigChanged {
            config: config.clone(),
        };
        self.config = Some(config);

        self.listeners
            .retain(|listener| listener.send(event.clone()).is_ok());
        tracing::debug!("Config changed, notified {} listeners", self.listeners.len());
        Ok(Some(event))
    }
}
