//! STDIO transport.
//!
//! The MCP client spawns this server and talks JSON-RPC over stdin/stdout;
//! rmcp drives the session and routes `tools/list` and `tools/call` to
//! [`McpServer`]'s `ServerHandler` impl. Logging is configured for stderr so
//! stdout carries protocol frames only.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("{} ready on stdin/stdout", name);

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO session for {} ended: {:?}", name, reason);
        Ok(())
    }
}
