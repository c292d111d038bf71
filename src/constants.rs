//! Card Constants
//!
//! Centralized defaults, host event tags and layout hints.

/// Default card title
pub const DEFAULT_TITLE: &str = "Network Devices Events Timeline";

/// Default history window in hours
pub const DEFAULT_HOURS_BACK: u32 = 24;

/// Breakpoint applied when a config does not mention one
pub const DEFAULT_RESPONSIVE_BREAKPOINT: u32 = 767;

/// Breakpoint used by the preview (stub) config
pub const STUB_RESPONSIVE_BREAKPOINT: u32 = 480;

/// Display name for devices missing from the registry snapshot
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Host event fired when a device comes back online
pub const EVENT_DEVICE_ONLINE: &str = "device_pulse_device_came_online";

/// Host event fired when a device goes offline
pub const EVENT_DEVICE_OFFLINE: &str = "device_pulse_device_went_offline";

/// Stylesheet location served by the host
pub const STYLESHEET_PATH: &str = "/local/device-pulse-timeline/device-pulse-timeline.css";

/// Layout sizing hints reported to the host grid
pub const CARD_SIZE: u32 = 4;
pub const GRID_ROWS: u32 = 4;
pub const GRID_MIN_ROWS: u32 = 4;

/// Editor limits
pub const HOURS_BACK_MIN: u32 = 1;
pub const HOURS_BACK_MAX: u32 = 24 * 10;
pub const BREAKPOINT_MIN: u32 = 280;
pub const BREAKPOINT_MAX: u32 = 1024;

/// Mailbox batch size per drain
pub const MAILBOX_BATCH_SIZE: usize = 256;

/// Card registration
pub const CARD_TYPE: &str = "device-pulse-timeline";
pub const CARD_NAME: &str = "Device Pulse Timeline";
pub const CARD_DESCRIPTION: &str =
    "Device Pulse Integration Connection/Disconnection Events Timeline";
pub const CARD_DOCUMENTATION_URL: &str =
    "https://github.com/studiobts/home-assistant-device-pulse-timeline-card";
