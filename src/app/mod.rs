//! Application Layer
//!
//! Process-level wiring: card type registration.

pub mod registry;

pub use registry::*;
