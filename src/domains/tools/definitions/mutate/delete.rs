//! Delete a tower record.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::success_result;
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteTowerParams {
    #[schemars(description = "Database ID of the tower to delete")]
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct DeleteTowerTool;

#[async_trait]
impl TowerTool for DeleteTowerTool {
    const NAME: &'static str = "delete_tower";
    const DESCRIPTION: &'static str = "Delete a cell tower by its database ID";
    const REQUIRED: &'static [&'static str] = &["id"];
    type Params = DeleteTowerParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Deleting tower {}", params.id);
        client.delete(&Endpoint::path([params.id])).await?;
        Ok(success_result(format!(
            "Tower {} deleted successfully",
            params.id
        )))
    }
}
