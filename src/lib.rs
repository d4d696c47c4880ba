//! Cell Tower MCP Server Library
//!
//! This crate exposes a cell tower data service to Model Context Protocol
//! clients as a fixed catalog of tools: tower queries, create, update and
//! delete, and a coverage analysis.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **api**: Lazily connected HTTP client for the upstream service
//!   - **analysis**: Coverage statistics over tower records
//!   - **tools**: Tool definitions, registry and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use cell_tower_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let result = server
//!         .call_tool("get_tower_by_id", serde_json::json!({"id": 42}))
//!         .await;
//!     println!("{}", result);
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
