//! Card Config Files
//!
//! Reads a raw card config from disk for the demo binary. TOML and JSON are
//! accepted; the result is the untyped mapping the card normalizes itself.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a raw card config, picking the format from the file extension
pub fn load_card_config(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&content),
        Some("json") => Ok(serde_json::from_str(&content)?),
        other => Err(Error::InvalidConfig {
            message: format!(
                "unsupported config file extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ),
        }),
    }
}

/// Parse TOML card settings into a JSON mapping
pub fn parse_toml(content: &str) -> Result<Value> {
    Ok(toml::from_str::<Value>(content)?)
}
