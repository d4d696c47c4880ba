//! Common utilities shared across cell tower tools.
//!
//! This module provides the result envelope helpers and the parameter and
//! query types used by more than one tool.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::domains::tools::error::{ToolError, ToolResult};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// A geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    /// Minimum longitude.
    #[schemars(description = "Minimum longitude")]
    pub min_lon: f64,

    /// Maximum longitude.
    #[schemars(description = "Maximum longitude")]
    pub max_lon: f64,

    /// Minimum latitude.
    #[schemars(description = "Minimum latitude")]
    pub min_lat: f64,

    /// Maximum latitude.
    #[schemars(description = "Maximum latitude")]
    pub max_lat: f64,
}

impl BoundingBox {
    /// Argument names, all required together.
    pub const FIELDS: &'static [&'static str] = &["min_lon", "max_lon", "min_lat", "max_lat"];

    /// Upstream query parameters for this box.
    pub fn to_query(self) -> LocationQuery {
        LocationQuery {
            min_lon: self.min_lon,
            max_lon: self.max_lon,
            min_lat: self.min_lat,
            max_lat: self.max_lat,
        }
    }
}

/// Query string of `GET /location`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Pretty-print a JSON value for a text result.
pub fn pretty_json(value: &Value) -> ToolResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ToolError::internal(format!("failed to format response: {}", e)))
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result holding pretty-printed JSON.
pub fn json_result(value: &Value) -> ToolResult<CallToolResult> {
    Ok(success_result(pretty_json(value)?))
}

/// Render an error as a tool result.
///
/// Failures travel as ordinary text content prefixed with `Error:`; the
/// result itself is not flagged as an error.
pub fn error_result(err: &ToolError) -> CallToolResult {
    let message = err.to_string();
    error!("Tool execution error: {}", message);
    success_result(format!("Error: {}", message))
}

/// First text block of a result (test helper).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// An API client pointed at a mock server's `/api/cell-towers` (test helper).
#[cfg(test)]
pub fn mock_client(server: &wiremock::MockServer) -> crate::domains::api::ApiClient {
    crate::domains::api::ApiClient::new(crate::core::config::ApiConfig::new(format!(
        "{}/api/cell-towers",
        server.uri()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_result_is_text_not_error_flag() {
        let result = error_result(&ToolError::invalid_arguments("id parameter is required"));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "Error: id parameter is required"
        );
    }

    #[test]
    fn test_json_result_is_pretty_printed() {
        let result = json_result(&json!({"id": 1, "radio": "LTE"})).unwrap();
        assert_eq!(result_text(&result), "{\n  \"id\": 1,\n  \"radio\": \"LTE\"\n}");
    }

    #[test]
    fn test_bounding_box_query_names() {
        let bbox = BoundingBox {
            min_lon: 18.0,
            max_lon: 19.5,
            min_lat: -34.5,
            max_lat: -33.0,
        };
        let encoded = serde_urlencoded::to_string(bbox.to_query()).unwrap();
        assert_eq!(encoded, "minLon=18.0&maxLon=19.5&minLat=-34.5&maxLat=-33.0");
    }
}
