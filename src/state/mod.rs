//! State - Card State Modules
//!
//! Plain state owned by one timeline card. None of these types talk to the
//! host; the card feeds them from its mailbox.

pub mod event_store;
pub mod interaction_state;
pub mod layout_state;

pub use event_store::*;
pub use interaction_state::*;
pub use layout_state::*;
