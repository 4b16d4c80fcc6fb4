/*
[INPUT]:  Error sources (transport, API status, serialization, query encoding)
[OUTPUT]: Structured error type shared by every request path
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the FTX adapter
#[derive(Error, Debug)]
pub enum FtxError {
    /// The HTTP round trip could not complete (connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("[{}] body: {body}", .status.as_u16())]
    Api { status: StatusCode, body: String },

    /// JSON encoding of a request or decoding of a response failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A filter record could not be flattened into query parameters
    #[error("Query encoding error: {0}")]
    Encoding(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A credential could not be carried as an HTTP header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FtxError {
    /// Create an API error from the status code and raw response body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        FtxError::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of an API error, `None` for every other kind
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FtxError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the round trip itself failed before a status was received
    pub fn is_transport(&self) -> bool {
        matches!(self, FtxError::Http(_))
    }
}

/// Result type alias for FTX operations
pub type Result<T> = std::result::Result<T, FtxError>;
