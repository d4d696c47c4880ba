//! Transport selection for the cell tower server.
//!
//! [`TransportService`] picks the front end named by `MCP_TRANSPORT` and
//! hands it the [`McpServer`]. Every front end ends up in the same
//! `Dispatcher`, so tool behaviour does not depend on the transport.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs one configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve `server` until the transport ends: stdin closed for STDIO,
    /// Ctrl-C for HTTP.
    ///
    /// The upstream client is not closed here; [`McpServer::run`] does that
    /// after this returns.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            "Serving {} tools for {} via {}",
            server.dispatcher().list_tools().len(),
            server.name(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}
