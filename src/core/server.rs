//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the [`Dispatcher`].
//!
//! `call_tool` is implemented by hand instead of through a tool router:
//! every call, including one for an unknown tool, must come back as a
//! result envelope rather than a protocol error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use super::transport::{TransportConfig, TransportService};
use crate::domains::api::ApiClient;
use crate::domains::tools::{Dispatcher, ToolRegistry};

const INSTRUCTIONS: &str = "Cell tower intelligence server. Query, create, update and delete \
     cell tower records, and analyze coverage by radio type and location.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatcher holding the registry and the shared API client.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if a tool's schema does not match its declared required fields.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let registry = Arc::new(ToolRegistry::new()?);
        let client = Arc::new(ApiClient::new(config.api.clone()));

        info!("Registered {} tools", registry.len());

        Ok(Self {
            dispatcher: Dispatcher::new(registry, client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Server instructions reported on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Always yields a result envelope. Arguments that are not a JSON
    /// object are treated as absent.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        };
        let result = self.dispatcher.execute(name, arguments).await;
        serde_json::to_value(&result).unwrap_or_else(|e| {
            serde_json::json!({
                "content": [{"type": "text", "text": format!("Error: {}", e)}]
            })
        })
    }

    /// Release the upstream connection. Safe to call more than once.
    pub async fn shutdown(&self) {
        self.dispatcher.client().close().await;
    }

    /// Serve over `transport` until it finishes, then release the upstream
    /// connection. The client is closed even when the transport failed.
    pub async fn run(self, transport: TransportConfig) -> Result<()> {
        let outcome = TransportService::new(transport).run(self.clone()).await;

        info!("Server shutting down");
        self.shutdown().await;

        Ok(outcome?)
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self
            .dispatcher
            .execute(&request.name, request.arguments)
            .await)
    }
}
