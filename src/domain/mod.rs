//! Domain - Pure Data Structures and Host Payload Types
//!
//! These types carry no behavior beyond validation and small conversions.

pub mod event_record;
pub mod raw_event;
pub mod widget_config;

pub use event_record::*;
pub use raw_event::*;
pub use widget_config::*;
