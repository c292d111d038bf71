//! InteractionState - Filter and Highlight
//!
//! Two independent device selections driven by the user. Neither touches the
//! event store; they only shape what gets presented.

use crate::domain::DeviceId;

/// Device filter and highlight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    filter: Option<DeviceId>,
    highlight: Option<DeviceId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on an event's content area.
    ///
    /// Highlights `device` when nothing is highlighted, otherwise clears the
    /// highlight whichever device was clicked.
    pub fn toggle_highlight(&mut self, device: &DeviceId) -> Option<&DeviceId> {
        self.highlight = match self.highlight {
            None => Some(device.clone()),
            Some(_) => None,
        };
        self.highlight.as_ref()
    }

    pub fn highlight(&self) -> Option<&DeviceId> {
        self.highlight.as_ref()
    }

    pub fn is_highlighted(&self, device: &DeviceId) -> bool {
        self.highlight.as_ref() == Some(device)
    }

    /// Narrow the timeline to `device` (or show every device with `None`)
    pub fn set_filter(&mut self, device: Option<DeviceId>) {
        self.filter = device;
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn filter(&self) -> Option<&DeviceId> {
        self.filter.as_ref()
    }
}
