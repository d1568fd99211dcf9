//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Form engine error type
///
/// None of these reach the end user as a blocking failure: the engine recovers
/// locally and logs. They exist so that fallible boundaries (schema decoding,
/// option fetching, host configuration) have a typed result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum FormError {
    /// Schema document could not be decoded
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Network error (connection refused, DNS, aborted body...)
    #[error("Network error: {0}")]
    Network(String),

    /// Remote endpoint answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Response body is not a JSON array of option values
    #[error("Decode error: {0}")]
    Decode(String),

    /// Option fetch task ended without producing a result (panicked or aborted)
    #[error("Task error: {0}")]
    Task(String),

    /// Host/front-end configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl FormError {
    /// Whether it is expected behavior (bad input, remote side failure), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidSchema(_)
            | Self::Network(_)
            | Self::HttpStatus { .. }
            | Self::Decode(_) => true,
            Self::Task(_) | Self::Config(_) => false,
        }
    }
}

/// Form engine Result type alias
pub type FormResult<T> = std::result::Result<T, FormError>;
