//! Error types shared by the model and codec layers.
//!
//! # Responsibility
//! - Carry the offending code for every out-of-range kind value.
//! - Keep stream/format failures distinct from value failures.
//!
//! # Invariants
//! - `InvalidValue` always renders as `Invalid number <N>`.
//! - `CodecError::Stream` messages are never empty.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prefix shared by every stream/format diagnostic.
pub const STREAM_ERROR_PREFIX: &str = "input stream error";

pub type CodecResult<T> = Result<T, CodecError>;

/// A kind code that is not part of the enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidValue {
    /// The literal code that failed lookup.
    pub value: i32,
}

impl InvalidValue {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid number {}", self.value)
    }
}

impl Error for InvalidValue {}

/// Failure of one encode/decode call.
#[derive(Debug)]
pub enum CodecError {
    /// Kind code held in memory or read from input is out of range.
    InvalidValue(InvalidValue),
    /// Input was short, malformed, or the underlying reader/writer failed.
    Stream(String),
    /// Archive was written by a newer format revision.
    UnsupportedVersion { found: u32, latest_supported: u32 },
}

impl CodecError {
    /// Builds a stream error with the shared diagnostic prefix.
    pub fn stream(detail: impl Display) -> Self {
        Self::Stream(format!("{STREAM_ERROR_PREFIX}: {detail}"))
    }

    /// Returns the offending code when this is a value failure.
    pub fn invalid_value(&self) -> Option<i32> {
        match self {
            Self::InvalidValue(err) => Some(err.value),
            _ => None,
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue(err) => write!(f, "{err}"),
            Self::Stream(message) => write!(f, "{message}"),
            Self::UnsupportedVersion {
                found,
                latest_supported,
            } => write!(
                f,
                "archive version {found} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            Self::Stream(_) => None,
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<InvalidValue> for CodecError {
    fn from(value: InvalidValue) -> Self {
        Self::InvalidValue(value)
    }
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::stream(value)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::stream(value)
    }
}
