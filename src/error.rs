//! Error types for qrcon
//!
//! Provides a unified error type for all operations.
//!
//! A receive timeout is deliberately NOT represented here: the rcon
//! protocol has no end-of-response marker, so running out of datagrams is
//! the normal way a response ends. Transmit failures during a send are
//! logged and absorbed rather than surfaced, so repeated admin polling
//! keeps going through transient network blips.

use thiserror::Error;

/// Result type alias using RconError
pub type Result<T> = std::result::Result<T, RconError>;

/// Unified error type for qrcon operations
#[derive(Debug, Error)]
pub enum RconError {
    // -------------------------------------------------------------------------
    // Socket Setup Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not resolve server address: {0}")]
    Address(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Dispatch Errors
    // -------------------------------------------------------------------------
    #[error("invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("missing argument at position {0}")]
    MissingArgument(usize),

    #[error("invalid argument at position {index}: {value:?}")]
    InvalidArgument { index: usize, value: String },
}
