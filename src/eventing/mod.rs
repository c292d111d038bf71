//! Eventing - Messages Flowing Into and Out of the Card

pub mod card_message;
pub mod config_changed;

pub use card_message::*;
pub use config_changed::*;
