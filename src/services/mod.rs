//! Service Layer
//!
//! Host access and the async plumbing around it: the host contract, the
//! device name snapshot, event normalization and the loader tasks that feed a
//! card's mailbox.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TimelineHost                            │
//! │   registry      history      subscriptions      stylesheet   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │ loader / live callbacks
//!                            ▼ CardMessage
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TimelineCard                            │
//! │   resolver ─► normalizer ─► EventStore   LayoutState  ...    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod host;
mod loader;
pub mod memory_host;
mod normalizer;
mod resolver;
pub mod runtime;
mod subscription;

pub use host::*;
pub use loader::*;
pub use memory_host::MemoryHost;
pub use normalizer::*;
pub use resolver::*;
pub use subscription::*;
