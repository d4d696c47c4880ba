//! Partial update of a tower record.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::{pretty_json, success_result};
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTowerParams {
    /// Database ID of the tower.
    #[schemars(description = "Database ID of the tower")]
    pub id: i64,

    /// Fields to change, sent verbatim as the PATCH body.
    #[schemars(description = "Fields to update (e.g., {\"averageSignal\": -80})")]
    pub updates: JsonObject,
}

#[derive(Debug, Clone)]
pub struct UpdateTowerTool;

#[async_trait]
impl TowerTool for UpdateTowerTool {
    const NAME: &'static str = "update_tower";
    const DESCRIPTION: &'static str =
        "Update specific fields of an existing cell tower (partial update)";
    const REQUIRED: &'static [&'static str] = &["id", "updates"];
    type Params = UpdateTowerParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!(
            "Updating tower {}: {:?}",
            params.id,
            params.updates.keys().collect::<Vec<_>>()
        );

        let body = Value::Object(params.updates);
        let data = client.patch(&Endpoint::path([params.id]), &body).await?;

        Ok(success_result(format!(
            "Tower updated successfully:\n{}",
            pretty_json(&data)?
        )))
    }
}
