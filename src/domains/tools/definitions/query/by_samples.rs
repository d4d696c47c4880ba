//! Filter towers by minimum sample count.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTowersByMinSamplesParams {
    #[schemars(description = "Minimum number of samples")]
    pub min_samples: i64,
}

#[derive(Debug, Clone)]
pub struct GetTowersByMinSamplesTool;

#[async_trait]
impl TowerTool for GetTowersByMinSamplesTool {
    const NAME: &'static str = "get_towers_by_min_samples";
    const DESCRIPTION: &'static str = "Filter towers by minimum number of samples collected";
    const REQUIRED: &'static [&'static str] = &["min_samples"];
    type Params = GetTowersByMinSamplesParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Fetching towers with min samples: {}", params.min_samples);
        let data = client
            .get(&Endpoint::path([
                "samples".to_string(),
                params.min_samples.to_string(),
            ]))
            .await?;
        json_result(&data)
    }
}
