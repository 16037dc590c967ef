//! Unified error handling for the mining pipeline.
//!
//! Malformed input is recoverable at the batch level (the offending trip is
//! skipped); configuration and I/O errors abort the run.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors produced by the mining pipeline.
#[derive(Debug)]
pub enum MiningError {
    /// A segment id is missing its `-` separator or has an empty endpoint.
    ///
    /// Recoverable: the trip record is rejected and the batch continues.
    MalformedSegment { trip_id: String, segment: String },

    /// A configuration value is outside its allowed range.
    InvalidConfig { message: String },

    /// Writing a result file failed. Fatal for the run; levels already
    /// flushed remain valid.
    Io(std::io::Error),
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSegment { trip_id, segment } => {
                write!(
                    f,
                    "trip {trip_id}: malformed segment id '{segment}' (expected '<source>-<target>')"
                )
            }
            Self::InvalidConfig { message } => write!(f, "invalid configuration: {message}"),
            Self::Io(err) => write!(f, "result write failed: {err}"),
        }
    }
}

impl std::error::Error for MiningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MiningError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Extension trait for converting `Option` values into mining errors.
pub trait OptionExt<T> {
    /// Convert `None` into a [`MiningError::MalformedSegment`] carrying the
    /// trip and segment that failed to parse.
    fn ok_or_malformed(self, trip_id: &str, segment: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_malformed(self, trip_id: &str, segment: &str) -> Result<T> {
        self.ok_or_else(|| MiningError::MalformedSegment {
            trip_id: trip_id.to_string(),
            segment: segment.to_string(),
        })
    }
}
