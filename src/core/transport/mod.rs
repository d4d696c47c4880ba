//! Front ends for the cell tower server.
//!
//! - **STDIO** (feature `stdio`, default): the MCP client spawns the server
//!   and speaks JSON-RPC over stdin/stdout.
//! - **HTTP** (feature `http`): JSON-RPC over `POST /mcp` for clients that
//!   cannot spawn processes, plus `/health`.
//!
//! `MCP_TRANSPORT` selects one at startup; see [`TransportConfig::from_env`].

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
