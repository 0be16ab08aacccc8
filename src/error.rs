//! Error types for settings loading.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors surfaced while constructing the process settings.
///
/// Environment lookups themselves never fail (every variable has a default);
/// only malformed values and broken invariants are reported, at startup.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `MAX_FILE_SIZE` was set but is not a valid byte count.
    #[error("MAX_FILE_SIZE {value:?} is not a valid byte count: {source}")]
    InvalidMaxFileSize {
        value: String,
        source: std::num::ParseIntError,
    },

    /// A file suffix is claimed by more than one media category.
    #[error("file suffix {0:?} appears in more than one media category")]
    OverlappingSuffix(&'static str),

    /// The working directory could not be determined.
    #[error("failed to determine working directory: {0}")]
    HomeDir(#[from] std::io::Error),

    /// `init_settings` was called after the global settings were already set.
    #[error("settings already initialized; call init_settings() before any use of settings()")]
    AlreadyInitialized,
}
