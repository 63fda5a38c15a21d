//! Error types shared by representations, descriptors, resources and the
//! HTTP executor.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the admin client.
#[derive(Debug, Error)]
pub enum Error {
    /// The property is not part of the representation's schema.
    #[error("property \"{property}\" does not exist in \"{representation}\"")]
    PropertyDoesNotExist {
        /// Representation kind, e.g. `Realm`.
        representation: &'static str,
        /// Requested property name.
        property: String,
    },

    /// The property is declared but was never assigned.
    #[error("property \"{property}\" of \"{representation}\" has not been assigned")]
    PropertyNotAssigned {
        /// Representation kind.
        representation: &'static str,
        /// Requested property name.
        property: String,
    },

    /// Structured data could not be decoded into the requested shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path is missing or is not a regular file.
    #[error("filesystem error for {}: {reason}", path.display())]
    Filesystem {
        /// Offending path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Caller input is ambiguous or does not select anything.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A `{placeholder}` in a path template has no value.
    #[error("missing value for path parameter \"{parameter}\" in \"{template}\"")]
    MissingPathParameter {
        /// The path template.
        template: String,
        /// The unmatched placeholder.
        parameter: String,
    },

    /// The server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body (sanitized).
        message: String,
    },

    /// Opaque failure from the transport.
    #[error("transport error: {0:#}")]
    Transport(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Whether the error comes from decoding structured data.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Json(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
