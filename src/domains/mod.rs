//! Domains module containing business logic organized by bounded contexts.
//!
//! - `api` talks to the upstream cell tower service
//! - `analysis` computes coverage statistics over tower records
//! - `tools` exposes both as MCP tools

pub mod analysis;
pub mod api;
pub mod tools;
