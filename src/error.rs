//! Custom error types for the preference store.
//!
//! This module provides fine-grained error handling for preference file
//! persistence and display profile lookups.

use thiserror::Error;

/// Main error type for preference store operations.
#[derive(Error, Debug)]
pub enum PrefError {
    /// Failed to read or write the preferences file.
    #[error("Preferences file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences file contains malformed JSON.
    #[error("Failed to parse preferences file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Current display tag does not resolve to a known profile.
    ///
    /// Only reachable when the tag field was mutated directly, bypassing the
    /// setter's membership check.
    #[error("Unknown HDR display tag '{tag}'")]
    UnknownDisplayTag { tag: String },
}

/// Result type alias for preference store operations.
pub type Result<T> = std::result::Result<T, PrefError>;
