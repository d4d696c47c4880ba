//! Filter towers by average signal strength.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTowersBySignalRangeParams {
    /// Lower bound in dBm.
    #[schemars(description = "Minimum signal strength in dBm")]
    pub min_signal: i64,

    /// Upper bound in dBm.
    #[schemars(description = "Maximum signal strength in dBm")]
    pub max_signal: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignalQuery {
    min_signal: i64,
    max_signal: i64,
}

#[derive(Debug, Clone)]
pub struct GetTowersBySignalRangeTool;

#[async_trait]
impl TowerTool for GetTowersBySignalRangeTool {
    const NAME: &'static str = "get_towers_by_signal_range";
    const DESCRIPTION: &'static str =
        "Filter towers by signal strength range in dBm (e.g., -90 to -70 for moderate signals)";
    const REQUIRED: &'static [&'static str] = &["min_signal", "max_signal"];
    type Params = GetTowersBySignalRangeParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!(
            "Fetching towers by signal range: {}..{} dBm",
            params.min_signal, params.max_signal
        );
        let endpoint = Endpoint::path(["signal"]).with_query(&SignalQuery {
            min_signal: params.min_signal,
            max_signal: params.max_signal,
        })?;
        let data = client.get(&endpoint).await?;
        json_result(&data)
    }
}
