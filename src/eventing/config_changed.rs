//! ConfigChanged - Editor Notification
//!
//! Emitted by the config editor once per field edit. The host persists the
//! carried config and hands it back to the card.

use serde_json::{Map, Value};

use crate::domain::WidgetConfig;
use crate::error::Result;

/// Full normalized config after one edit
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChanged {
    pub config: WidgetConfig,
}

impl ConfigChanged {
    /// Payload in the shape the host expects (`{"config": {...}}`)
    pub fn detail(&self) -> Result<Value> {
        let mut detail = Map::new();
        detail.insert("config".to_string(), Value::Object(self.config.to_map()?));
        Ok(Value::Object(detail))
    }
}
