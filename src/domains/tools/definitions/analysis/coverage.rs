//! Coverage analysis tool.
//!
//! Fetches one filtered tower list and summarizes it with
//! [`crate::domains::analysis::analyze`].

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::analysis::analyze;
use crate::domains::api::{ApiClient, ApiError, Endpoint, Tower};
use crate::domains::tools::definitions::common::{BoundingBox, success_result};
use crate::domains::tools::{ToolError, ToolResult, TowerTool};

/// Text returned when the filter matched nothing.
pub const NO_TOWERS_FOUND: &str = "No towers found matching the criteria";

/// Optional filters for the analysis.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AnalyzeCoverageParams {
    #[schemars(description = "Optional: Filter by radio type")]
    pub radio: Option<String>,

    #[schemars(description = "Optional: Minimum longitude")]
    pub min_lon: Option<f64>,

    #[schemars(description = "Optional: Maximum longitude")]
    pub max_lon: Option<f64>,

    #[schemars(description = "Optional: Minimum latitude")]
    pub min_lat: Option<f64>,

    #[schemars(description = "Optional: Maximum latitude")]
    pub max_lat: Option<f64>,
}

/// Which towers to analyze.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageFilter {
    Radio(String),
    Location(BoundingBox),
    All,
}

impl AnalyzeCoverageParams {
    /// Pick the filter: a non-blank radio wins, then a complete bounding
    /// box, otherwise every tower. A partial box is ignored.
    pub fn filter(&self) -> CoverageFilter {
        if let Some(radio) = self.radio.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            return CoverageFilter::Radio(radio.to_string());
        }

        match (self.min_lon, self.max_lon, self.min_lat, self.max_lat) {
            (Some(min_lon), Some(max_lon), Some(min_lat), Some(max_lat)) => {
                CoverageFilter::Location(BoundingBox {
                    min_lon,
                    max_lon,
                    min_lat,
                    max_lat,
                })
            }
            _ => CoverageFilter::All,
        }
    }
}

impl CoverageFilter {
    /// The single upstream endpoint to fetch for this filter.
    pub fn endpoint(&self) -> ToolResult<Endpoint> {
        let endpoint = match self {
            Self::Radio(radio) => Endpoint::path(["radio", radio.as_str()]),
            Self::Location(bbox) => Endpoint::path(["location"]).with_query(&bbox.to_query())?,
            Self::All => Endpoint::root(),
        };
        Ok(endpoint)
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeCoverageTool;

#[async_trait]
impl TowerTool for AnalyzeCoverageTool {
    const NAME: &'static str = "analyze_coverage";
    const DESCRIPTION: &'static str =
        "Analyze tower coverage statistics by radio type and location";
    const REQUIRED: &'static [&'static str] = &[];
    type Params = AnalyzeCoverageParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        let filter = params.filter();
        info!("Analyzing coverage with filter: {:?}", filter);

        let data = client.get(&filter.endpoint()?).await?;
        let towers = Tower::list_from_value(data)?;

        let analysis =
            analyze(&towers).map_err(|e| ApiError::invalid_response(e.to_string()))?;
        let Some(analysis) = analysis else {
            return Ok(success_result(NO_TOWERS_FOUND));
        };

        info!("Analyzed {} towers", analysis.total_towers);
        let text = serde_json::to_string_pretty(&analysis)
            .map_err(|e| ToolError::internal(format!("failed to format analysis: {}", e)))?;
        Ok(success_result(text))
    }
}
