//! Tool-specific error types.

use thiserror::Error;

use crate::domains::api::ApiError;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool operations.
///
/// None of these reach the MCP client as a protocol error: the dispatcher
/// renders every variant into the text of a regular tool result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The upstream cell tower API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A tool's declared required fields disagree with its generated schema.
    #[error("Schema mismatch for tool '{tool}': {reason}")]
    Schema { tool: String, reason: String },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new schema registration error.
    pub fn schema(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
