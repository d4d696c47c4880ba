//! Tools domain module.
//!
//! Every cell tower operation is exposed to MCP clients as a tool.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The typed [`TowerTool`] trait and its object-safe form
//! - `registry.rs` - Ordered catalog and name-indexed handler table
//! - `dispatcher.rs` - Validation, routing and the error envelope
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing [`TowerTool`]
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in [`ToolRegistry::new`]

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;

pub use dispatcher::Dispatcher;
pub use error::{ToolError, ToolResult};
pub use handlers::{TowerTool, ToolHandler, TypedHandler, check_required};
pub use registry::ToolRegistry;
