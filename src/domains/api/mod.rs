//! Cell tower API domain module.
//!
//! This module owns the outbound side of the server: a single, lazily
//! created HTTP handle to the upstream cell tower service and the record
//! types read back from it.
//!
//! ## Architecture
//!
//! - `client.rs` - Connection manager with verb helpers (GET/POST/PATCH/DELETE)
//! - `endpoint.rs` - Path segments and encoded query strings
//! - `model.rs` - Tower record as returned by the upstream service
//! - `error.rs` - Connection, status and decoding errors

mod client;
mod endpoint;
mod error;
mod model;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use model::Tower;
