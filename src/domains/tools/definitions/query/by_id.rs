//! Single tower lookup by database ID.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolResult, TowerTool};

/// Parameters for the ID lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTowerByIdParams {
    /// Database ID of the tower.
    #[schemars(description = "Database ID of the tower")]
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct GetTowerByIdTool;

#[async_trait]
impl TowerTool for GetTowerByIdTool {
    const NAME: &'static str = "get_tower_by_id";
    const DESCRIPTION: &'static str = "Get a specific cell tower by its database ID";
    const REQUIRED: &'static [&'static str] = &["id"];
    type Params = GetTowerByIdParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Fetching tower {}", params.id);
        let data = client.get(&Endpoint::path([params.id])).await?;
        json_result(&data)
    }
}
