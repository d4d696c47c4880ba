//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for everything that can stop the
//! server from starting or serving: tool registration and the transports.
//! Tool calls never surface it to clients.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::tools::ToolError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Transport failures (bind, serve, initialization).
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
