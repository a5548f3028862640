//! Error types for the wiki API client.
//!
//! # Design
//! Two disjoint channels. `UsageError` is raised synchronously while options
//! are validated and never reaches the network. `ApiError` covers the faults
//! that end a dispatched call without producing an `Outcome`. A remote-side
//! failure (4xx, 5xx, refused connection) is not an error at all: it is an
//! `Outcome::Failure`.

use thiserror::Error;

/// A caller supplied options that the endpoint does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The option is present but has the wrong shape.
    #[error("option `{option}` only accepts {expected}")]
    InvalidType {
        option: &'static str,
        expected: &'static str,
    },

    /// The endpoint requires this option and it was not supplied.
    #[error("option `{option}` is required")]
    MissingRequired { option: &'static str },

    /// An integer option fell outside its closed range.
    #[error("option `{option}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        option: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl UsageError {
    /// Name of the option that failed validation.
    pub fn option(&self) -> &'static str {
        match self {
            UsageError::InvalidType { option, .. }
            | UsageError::MissingRequired { option }
            | UsageError::OutOfRange { option, .. } => option,
        }
    }
}

/// Faults that abort a call instead of settling its outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A 200, 400 or 404 response carried a body that is not JSON.
    #[error("HTTP {status} body is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A success payload is valid JSON but does not match the requested type.
    #[error("success payload does not match the expected shape: {source}")]
    Schema {
        #[source]
        source: serde_json::Error,
    },

    /// The transport returned neither a response nor an error.
    #[error("transport reply carried neither a response nor an error")]
    Unsettled,
}
