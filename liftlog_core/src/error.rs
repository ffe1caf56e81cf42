//! Error types for the liftlog_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for liftlog_core operations
///
/// Lookups that find nothing are not errors: they return `None` or `false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The logbook file could not be read or decoded
    #[error("Unable to read from file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    /// The logbook file could not be written
    #[error("Unable to write logs to the file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error outside logbook persistence
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input rejected before it reached the model
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Why a logbook read failed
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Missing or unreadable file
    #[error(transparent)]
    Io(#[from] io::Error),

    /// File contents are not a valid logbook document
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Decoding failure for a logbook document.
///
/// A single bad record fails the whole document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed JSON, a missing field, or a field of the wrong type
    #[error("malformed logbook JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Muscle label outside the closed set
    #[error("unknown muscle type {0:?}")]
    UnknownMuscle(String),
}

impl Error {
    /// True when a read failed because the file does not exist.
    ///
    /// A path with a regular file in place of one of its directories cannot
    /// exist either, so it counts as missing.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            Error::Read {
                source: ReadError::Io(e),
                ..
            } if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
        )
    }
}
