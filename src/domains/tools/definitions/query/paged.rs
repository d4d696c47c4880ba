//! Paged and sorted tower listing.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::json_result;
use crate::domains::tools::{ToolResult, TowerTool};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Default sort field.
pub const DEFAULT_SORT_BY: &str = "id";

/// Sort order of a paged listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_string()
}

/// Parameters for the paged listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTowersPagedParams {
    /// Page number (0-indexed).
    #[schemars(description = "Page number (0-indexed)")]
    #[serde(default)]
    pub page: u32,

    /// Items per page.
    #[schemars(description = "Items per page")]
    #[serde(default = "default_page_size")]
    pub size: u32,

    /// Field to sort by.
    #[schemars(description = "Field to sort by (e.g., averageSignal, mcc)")]
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Sort direction.
    #[schemars(description = "Sort direction: asc or desc")]
    #[serde(default)]
    pub sort_direction: SortDirection,
}

/// Query string of `GET /paged`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PagedQuery<'a> {
    page: u32,
    size: u32,
    sort_by: &'a str,
    sort_direction: SortDirection,
}

/// Page through towers with sorting.
#[derive(Debug, Clone)]
pub struct GetTowersPagedTool;

#[async_trait]
impl TowerTool for GetTowersPagedTool {
    const NAME: &'static str = "get_towers_paged";
    const DESCRIPTION: &'static str =
        "Get cell towers with pagination and sorting. Efficient for large datasets.";
    const REQUIRED: &'static [&'static str] = &[];
    type Params = GetTowersPagedParams;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        info!(
            "Fetching towers page {} (size {}, sort {} {:?})",
            params.page, params.size, params.sort_by, params.sort_direction
        );

        let endpoint = Endpoint::path(["paged"]).with_query(&PagedQuery {
            page: params.page,
            size: params.size,
            sort_by: &params.sort_by,
            sort_direction: params.sort_direction,
        })?;

        let data = client.get(&endpoint).await?;
        json_result(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::mock_client;
    use rmcp::model::JsonObject;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let params = GetTowersPagedTool::parse_params(JsonObject::new()).unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 50);
        assert_eq!(params.sort_by, "id");
        assert_eq!(params.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_null_falls_back_to_default() {
        let params = GetTowersPagedTool::parse_params(args(json!({"size": null}))).unwrap();
        assert_eq!(params.size, 50);
    }

    #[test]
    fn test_unknown_sort_direction_rejected() {
        let result = GetTowersPagedTool::parse_params(args(json!({"sort_direction": "sideways"})));
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_lists_sort_directions() {
        let schema = serde_json::to_string(&GetTowersPagedTool::to_tool().input_schema).unwrap();
        assert!(schema.contains("\"asc\""));
        assert!(schema.contains("\"desc\""));
    }

    #[tokio::test]
    async fn test_query_names_are_translated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cell-towers/paged"))
            .and(query_param("page", "2"))
            .and(query_param("size", "10"))
            .and(query_param("sortBy", "averageSignal"))
            .and(query_param("sortDirection", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .expect(1)
            .mount(&server)
            .await;

        let params = GetTowersPagedTool::parse_params(args(json!({
            "page": 2,
            "size": 10,
            "sort_by": "averageSignal",
            "sort_direction": "desc"
        })))
        .unwrap();

        let client = mock_client(&server);
        GetTowersPagedTool::execute(params, &client).await.unwrap();
    }
}
