//! WidgetConfig - Card Configuration
//!
//! Host-supplied card settings. Missing fields get defaults, unknown fields are
//! carried along untouched so newer configs survive a round trip through an older
//! card.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_HOURS_BACK, DEFAULT_RESPONSIVE_BREAKPOINT, DEFAULT_TITLE, STUB_RESPONSIVE_BREAKPOINT,
};
use crate::error::{Error, Result};

/// Timeline orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized card configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WidgetConfig {
    /// Card title
    pub title: String,
    /// Size of the history window in hours
    pub hours_back: u32,
    /// Configured orientation
    pub orientation: Orientation,
    /// Truncate long device names instead of wrapping them
    pub device_name_clip: bool,
    /// Fall back to vertical orientation below `responsive_breakpoint`
    pub responsive_orientation: bool,
    /// Width in pixels under which the timeline turns vertical
    pub responsive_breakpoint: Option<u32>,
    /// Keys this card does not know about (e.g. the host's `type`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            hours_back: DEFAULT_HOURS_BACK,
            orientation: Orientation::Horizontal,
            device_name_clip: true,
            responsive_orientation: true,
            responsive_breakpoint: Some(DEFAULT_RESPONSIVE_BREAKPOINT),
            extra: Map::new(),
        }
    }
}

impl WidgetConfig {
    /// Config offered by the host's card picker preview
    pub fn stub() -> Self {
        Self {
            responsive_breakpoint: Some(STUB_RESPONSIVE_BREAKPOINT),
            ..Self::default()
        }
    }

    /// Build a config from raw host settings, filling defaults for missing fields.
    ///
    /// A `null` breakpoint is kept as "unset"; `null` on any other known field
    /// counts as missing.
    pub fn normalize_initial(raw: &Value) -> Result<Self> {
        let Some(raw) = raw.as_object() else {
            return Err(Error::InvalidConfig {
                message: "card config must be a mapping".to_string(),
            });
        };

        let mut merged = Self::default().to_map()?;
        for (key, value) in raw {
            if value.is_null() && key != "responsive_breakpoint" && merged.contains_key(key) {
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }

        let config: Self =
            serde_json::from_value(Value::Object(merged)).map_err(|e| Error::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Merge an editor patch into `current` and re-establish the cross-field rules.
    ///
    /// A `null` in the patch keeps the current value, except for the breakpoint
    /// where it means "unset".
    pub fn apply_edit(current: &Self, patch: &Value) -> Result<Self> {
        let Some(patch) = patch.as_object() else {
            return Err(Error::InvalidConfig {
                message: "config patch must be a mapping".to_string(),
            });
        };

        let mut merged = current.to_map()?;
        for (key, value) in patch {
            if value.is_null() && key != "responsive_breakpoint" {
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }

        let mut config = Self::normalize_initial(&Value::Object(merged))?;
        config.enforce_rules();
        Ok(config)
    }

    /// Horizontal timelines always clip names; a breakpoint only exists while
    /// responsive orientation is on.
    pub fn enforce_rules(&mut self) {
        if self.orientation == Orientation::Horizontal {
            self.device_name_clip = true;
        }
        if !self.responsive_orientation {
            self.responsive_breakpoint = None;
        }
    }

    /// Breakpoint in effect, if responsive orientation is enabled
    pub fn active_breakpoint(&self) -> Option<u32> {
        if self.responsive_orientation {
            self.responsive_breakpoint
        } else {
            None
        }
    }

    /// Serialize into a JSON mapping (the shape sent back to the host)
    pub fn to_map(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::InvalidConfig {
                message: format!("config serialized to non-mapping value: {other}"),
            }),
        }
    }

    /// JSON Schema describing the card config
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(WidgetConfig)
    }

    fn validate(&self) -> Result<()> {
        if self.hours_back == 0 {
            return Err(Error::InvalidConfig {
                message: "hours_back must be a positive integer".to_string(),
            });
        }
        if self.responsive_breakpoint == Some(0) {
            return Err(Error::InvalidConfig {
                message: "responsive_breakpoint must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}
