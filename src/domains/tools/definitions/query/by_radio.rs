//! Filter towers by radio technology.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolError, ToolResult, TowerTool};

/// Parameters for the radio filter.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTowersByRadioParams {
    /// Radio type.
    #[schemars(description = "Radio type: LTE, GSM, UMTS, or CDMA")]
    pub radio: String,
}

#[derive(Debug, Clone)]
pub struct GetTowersByRadioTool;

#[async_trait]
impl TowerTool for GetTowersByRadioTool {
    const NAME: &'static str = "get_towers_by_radio";
    const DESCRIPTION: &'static str =
        "Filter cell towers by radio technology type (LTE, GSM, UMTS, CDMA)";
    const REQUIRED: &'static [&'static str] = &["radio"];
    type Params = GetTowersByRadioParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        let radio = params.radio.trim();
        if radio.is_empty() {
            return Err(ToolError::invalid_arguments("radio parameter is required"));
        }

        info!("Fetching towers with radio type: {}", radio);
        let data = client.get(&Endpoint::path(["radio", radio])).await?;
        json_result(&data)
    }
}
