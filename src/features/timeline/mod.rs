//! Timeline Card
//!
//! The card actor and the view model it renders into.

mod card;
mod view;

pub use card::*;
pub use view::*;
