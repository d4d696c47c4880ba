//! List every tower.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::{NoParams, json_result};
use crate::domains::tools::{ToolResult, TowerTool};

/// Fetch all towers in one unpaged request.
#[derive(Debug, Clone)]
pub struct GetAllTowersTool;

#[async_trait]
impl TowerTool for GetAllTowersTool {
    const NAME: &'static str = "get_all_towers";
    const DESCRIPTION: &'static str =
        "Retrieve all cell towers in the database. Use with caution for large datasets.";
    const REQUIRED: &'static [&'static str] = &[];
    type Params = NoParams;

    async fn execute(_params: NoParams, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Fetching all towers");
        let data = client.get(&Endpoint::root()).await?;
        json_result(&data)
    }
}
