//! Config Editor
//!
//! Form schema and edit handling for the card's configuration panel.

mod config_editor;
mod schema;

pub use config_editor::*;
pub use schema::*;
