//! Utilities

pub mod config_file;
pub mod format;
