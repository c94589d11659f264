//! Error types for swatchsmith operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swatchsmith operations.
///
/// Color math itself is total once a [`crate::color::HexColor`] has been
/// parsed: out-of-gamut values are clamped, never reported. Errors only arise
/// at the text boundaries (hex strings, palette JSON, YAML configuration).
#[derive(Error, Debug)]
pub enum Error {
    /// Color text does not match `#RRGGBB` (leading `#` optional).
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Accessibility target is neither a preset nor a usable contrast ratio.
    #[error("Invalid accessibility target: {0}")]
    InvalidTarget(String),

    /// Color vision simulation name is not recognized.
    #[error("Unknown color vision simulation: {0}")]
    InvalidSimulation(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Palette JSON could not be read or written.
    #[error("Palette JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
