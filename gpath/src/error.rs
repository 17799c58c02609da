//! Error types for the gpath library.
//!
//! This module provides the error hierarchy for path construction, the
//! counted operators, byte decoding and dialect configuration, using
//! `thiserror` for ergonomic error handling.
//!
//! Questions that have no answer for a given pair of paths (a common base
//! between a drive path and a rooted path, for instance) are not errors:
//! the resolvers return `None` for those.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a gpath error.
///
/// # Examples
///
/// ```
/// use gpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the gpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path value would violate one of its structural invariants.
    ///
    /// This indicates a construction bug, never bad user text: the
    /// normalizer accepts any input.
    #[error("invalid path state: {details}")]
    InvalidState {
        /// Description of the violated invariant.
        details: String,
    },

    /// A counted operator was given a negative count.
    #[error("cannot {operation} a path by a negative count: {count}")]
    NegativeCount {
        /// The operator that rejected the count.
        operation: &'static str,
        /// The rejected count.
        count: isize,
    },

    /// A drive name was not empty or a single character.
    #[error("invalid drive '{drive}': {reason}")]
    InvalidDrive {
        /// The rejected drive name.
        drive: String,
        /// The reason the drive is invalid.
        reason: String,
    },

    /// Raw path bytes could not be decoded with the requested encoding.
    #[error("cannot decode path bytes as {encoding}: {reason}")]
    Decode {
        /// The encoding that was used.
        encoding: String,
        /// The underlying decoding failure.
        reason: String,
    },

    /// No decoder exists for the requested encoding.
    #[error("unsupported path encoding: {encoding}")]
    UnsupportedEncoding {
        /// The requested encoding name.
        encoding: String,
    },

    /// A platform tag was not recognised.
    #[error("unknown platform: '{name}'")]
    UnknownPlatform {
        /// The unrecognised platform name.
        name: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A YAML dialect file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON dialect file could not be parsed.
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dialect file could not be used.
    #[error("invalid dialect file {}: {reason}", path.display())]
    InvalidDialectFile {
        /// The dialect file.
        path: PathBuf,
        /// The reason the file could not be used.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates a broken path invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::Error;
    ///
    /// let err = Error::InvalidState { details: "root with parent level 1".into() };
    /// assert!(err.is_invalid_state());
    /// ```
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Check if error is a rejected negative count.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpath::Error;
    ///
    /// let err = Error::NegativeCount { operation: "truncate", count: -1 };
    /// assert!(err.is_negative_count());
    /// ```
    #[must_use]
    pub fn is_negative_count(&self) -> bool {
        matches!(self, Self::NegativeCount { .. })
    }
}
