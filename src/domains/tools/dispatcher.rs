//! Tool dispatch.
//!
//! [`Dispatcher::execute`] is the only place a [`ToolError`] turns into a
//! result envelope. Callers always get a `CallToolResult` back, whatever
//! went wrong: unknown names, bad arguments, upstream failures and even a
//! panicking handler.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, warn};

use super::definitions::common::error_result;
use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::domains::api::ApiClient;

/// Routes tool calls to their handlers with a shared API client.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    client: Arc<ApiClient>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, client: Arc<ApiClient>) -> Self {
        Self { registry, client }
    }

    /// The tool catalog, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.get_all_tools()
    }

    /// The shared API client.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Execute a tool by name. Never fails: errors come back as an
    /// `Error: ...` text envelope.
    pub async fn execute(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool called: {}", name);

        let Some(handler) = self.registry.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return error_result(&ToolError::not_found(name));
        };

        let arguments = arguments.unwrap_or_default();
        let call = handler.call(arguments, &self.client);

        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                if matches!(err, ToolError::InvalidArguments(_)) {
                    warn!("Invalid arguments for {}: {}", name, err);
                }
                error_result(&err)
            }
            Err(_) => error_result(&ToolError::internal(format!(
                "tool '{}' panicked while executing",
                name
            ))),
        }
    }
}
