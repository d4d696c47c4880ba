//! Filter towers by Mobile Country Code.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTowersByMccParams {
    /// Mobile Country Code.
    #[schemars(description = "Mobile Country Code (e.g., 655 for South Africa)")]
    pub mcc: i64,
}

#[derive(Debug, Clone)]
pub struct GetTowersByMccTool;

#[async_trait]
impl TowerTool for GetTowersByMccTool {
    const NAME: &'static str = "get_towers_by_mcc";
    const DESCRIPTION: &'static str = "Filter cell towers by Mobile Country Code (MCC)";
    const REQUIRED: &'static [&'static str] = &["mcc"];
    type Params = GetTowersByMccParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Fetching towers with MCC: {}", params.mcc);
        let data = client
            .get(&Endpoint::path(["mcc".to_string(), params.mcc.to_string()]))
            .await?;
        json_result(&data)
    }
}
