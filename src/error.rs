//! # Error Types
//!
//! Custom error types for the OSD layout tables using `thiserror`.

use thiserror::Error;

/// Main error type for OSD layout lookups
#[derive(Debug, Error)]
pub enum OsdError {
    /// Encoded position is neither the hidden sentinel nor a grid cell
    #[error("invalid OSD position: {0}")]
    InvalidPosition(u16),

    /// Row or column outside the character grid
    #[error("OSD cell out of range: row {row}, column {column}")]
    OutOfRange { row: u8, column: u8 },

    /// Flight mode index outside the name table
    #[error("flight mode index {0} out of range (must be 0-15)")]
    IndexOutOfRange(usize),

    /// Name does not match any OSD element
    #[error("unknown OSD element: {0}")]
    UnknownElement(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for OSD layout operations
pub type Result<T> = std::result::Result<T, OsdError>;
