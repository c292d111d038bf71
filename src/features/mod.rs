//! Features - Vertical Feature Slices
//!
//! Each feature owns its state machine and the data it hands to the host.

pub mod editor;
pub mod timeline;
