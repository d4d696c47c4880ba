//! Towers inside a geographic bounding box.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::{BoundingBox, json_result};
use crate::domains::tools::{ToolResult, TowerTool};

#[derive(Debug, Clone)]
pub struct GetTowersByLocationTool;

#[async_trait]
impl TowerTool for GetTowersByLocationTool {
    const NAME: &'static str = "get_towers_by_location";
    const DESCRIPTION: &'static str =
        "Search towers within a geographic bounding box (min/max longitude and latitude)";
    const REQUIRED: &'static [&'static str] = BoundingBox::FIELDS;
    type Params = BoundingBox;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!("Fetching towers by location: {:?}", params);
        let endpoint = Endpoint::path(["location"]).with_query(&params.to_query())?;
        let data = client.get(&endpoint).await?;
        json_result(&data)
    }
}
