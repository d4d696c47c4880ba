//! Upstream API error types.

use thiserror::Error;

/// Result type for upstream API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the cell tower API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP handle could not be built (bad base URL, bad header, TLS setup).
    #[error("Failed to initialize HTTP client: {0}")]
    ConnectionSetup(String),

    /// No response was received (DNS, refused connection, timeout).
    #[error("Failed to connect to cell tower API: {0}")]
    Connection(String),

    /// The upstream service answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The request could not be encoded.
    #[error("Invalid API request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Create a connection setup error.
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::ConnectionSetup(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }
}
