//! Error types for Device Pulse Timeline
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! None of these reach the host: every failing call site logs the error and
//! falls back to a safe state.

use snafu::Snafu;

/// Main error type for the card core
#[derive(Debug, Snafu)]
pub enum Error {
    /// A host resource (device registry, history, stylesheet) could not be loaded
    #[snafu(display("Unable to load {resource}: {message}"))]
    ResourceLoad {
        resource: &'static str,
        message: String,
    },

    /// Subscribing to a live event channel failed
    #[snafu(display("Unable to subscribe to {event_type}: {message}"))]
    Subscription { event_type: String, message: String },

    /// Card configuration is not usable
    #[snafu(display("Invalid config: {message}"))]
    InvalidConfig { message: String },

    /// A raw event payload could not be normalized
    #[snafu(display("Invalid event: {message}"))]
    InvalidEvent { message: String },

    /// A card type was registered twice
    #[snafu(display("Card type already registered: {type_name}"))]
    DuplicateCard { type_name: String },

    /// No card registered under the requested type
    #[snafu(display("Unknown card type: {type_name}"))]
    UnknownCard { type_name: String },

    /// IO error (config file reads)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
