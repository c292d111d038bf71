//! Device Pulse Timeline
//!
//! Core of a dashboard card showing device connect/disconnect events on a
//! timeline: event normalization and ordering, device name resolution,
//! responsive layout, filter/highlight state and config normalization.
//!
//! The rendering host implements [`services::TimelineHost`] and drives a
//! [`features::timeline::TimelineCard`].

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod services;
pub mod state;
pub mod utils;
