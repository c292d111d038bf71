//! Editor Form Schema
//!
//! Pure data describing the configuration form. The host form renderer reads
//! the serialized shape directly.

use serde::Serialize;

use crate::constants::{BREAKPOINT_MAX, BREAKPOINT_MIN, HOURS_BACK_MAX, HOURS_BACK_MIN};
use crate::domain::{Orientation, WidgetConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    Box,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    Dropdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input widget used for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    Text {},
    Number {
        min: u32,
        max: u32,
        step: u32,
        mode: NumberMode,
    },
    Select {
        mode: SelectMode,
        multiple: bool,
        options: Vec<SelectOption>,
    },
    Boolean {},
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    pub selector: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    pub schema: Vec<SchemaItem>,
}

/// One entry of the form: a field, or a grid of fields laid out side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaItem {
    Field(FieldSchema),
    Grid(GridSchema),
}

impl SchemaItem {
    /// Names of every field, grids flattened, in form order
    pub fn field_names(items: &[SchemaItem]) -> Vec<&'static str> {
        items
            .iter()
            .flat_map(|item| match item {
                SchemaItem::Field(field) => vec![field.name],
                SchemaItem::Grid(grid) => SchemaItem::field_names(&grid.schema),
            })
            .collect()
    }
}

/// Declarative schema builder
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    items: Vec<SchemaItem>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, required: bool, selector: Selector) -> Self {
        self.items.push(SchemaItem::Field(FieldSchema {
            name,
            required,
            selector,
        }));
        self
    }

    /// Add a required field only when `condition` holds
    pub fn field_if(self, condition: bool, name: &'static str, selector: Selector) -> Self {
        if condition { self.field(name, true, selector) } else { self }
    }

    pub fn grid(mut self, build: impl FnOnce(SchemaBuilder) -> SchemaBuilder) -> Self {
        self.items.push(SchemaItem::Grid(GridSchema {
            kind: "grid",
            name: "",
            schema: build(SchemaBuilder::new()).build(),
        }));
        self
    }

    pub fn build(self) -> Vec<SchemaItem> {
        self.items
    }
}

/// Form schema for `config`. Which fields appear depends on the orientation
/// and on the responsive flag.
pub fn editor_schema(config: &WidgetConfig) -> Vec<SchemaItem> {
    let vertical = config.orientation == Orientation::Vertical;
    let has_breakpoint = !vertical && config.responsive_orientation;

    SchemaBuilder::new()
        .field("title", false, Selector::Text {})
        .grid(|grid| {
            grid.field(
                "hours_back",
                true,
                Selector::Number {
                    min: HOURS_BACK_MIN,
                    max: HOURS_BACK_MAX,
                    step: 1,
                    mode: NumberMode::Box,
                },
            )
            .field(
                "orientation",
                true,
                Selector::Select {
                    mode: SelectMode::Dropdown,
                    multiple: false,
                    options: vec![
                        SelectOption {
                            value: "horizontal",
                            label: "Horizontal",
                        },
                        SelectOption {
                            value: "vertical",
                            label: "Vertical",
                        },
                    ],
                },
            )
            .field_if(vertical, "device_name_clip", Selector::Boolean {})
            .field_if(!vertical, "responsive_orientation", Selector::Boolean {})
            .field_if(
                has_breakpoint,
                "responsive_breakpoint",
                Selector::Number {
                    min: BREAKPOINT_MIN,
                    max: BREAKPOINT_MAX,
                    step: 1,
                    mode: NumberMode::Slider,
                },
            )
        })
        .build()
}

pub fn field_label(name: &str) -> Option<&'static str> {
    match name {
        "title" => Some("Card Title"),
        "hours_back" => Some("Hours Back"),
        "orientation" => Some("Orientation Mode"),
        "device_name_clip" => Some("Clip Device Name"),
        "responsive_orientation" => Some("Responsive Orientation"),
        "responsive_breakpoint" => Some("Responsive Breakpoint"),
        _ => None,
    }
}

pub fn field_helper(name: &str) -> Option<&'static str> {
    match name {
        "device_name_clip" => {
            Some("Truncate device names that are too long instead of wrapping them")
        }
        "responsive_orientation" => {
            Some("Automatically revert to vertical orientation if there is no enough space")
        }
        _ => None,
    }
}
