//! End-to-end tool calls against a mock cell tower API.

use cell_tower_mcp_server::core::config::ApiConfig;
use cell_tower_mcp_server::{Config, McpServer};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPECTED_TOOLS: [&str; 12] = [
    "get_all_towers",
    "get_towers_paged",
    "get_tower_by_id",
    "get_towers_by_radio",
    "get_towers_by_mcc",
    "get_towers_by_location",
    "get_towers_by_signal_range",
    "get_towers_by_min_samples",
    "create_tower",
    "update_tower",
    "delete_tower",
    "analyze_coverage",
];

fn server_for(base_url: String) -> McpServer {
    let config = Config {
        api: ApiConfig::new(base_url),
        ..Config::default()
    };
    McpServer::new(config).expect("server should build")
}

fn mock_server(upstream: &MockServer) -> McpServer {
    server_for(format!("{}/api/cell-towers", upstream.uri()))
}

fn text(result: &Value) -> &str {
    result["content"][0]["text"]
        .as_str()
        .expect("result should carry a text block")
}

#[test]
fn test_catalog_is_stable_and_described() {
    let server = server_for("http://localhost:8080/api/cell-towers".to_string());
    let tools = server.list_tools();

    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, EXPECTED_TOOLS);

    for tool in &tools {
        let description = tool["description"].as_str().unwrap_or_default();
        assert!(!description.is_empty(), "{} has no description", tool["name"]);
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[tokio::test]
async fn test_unknown_tool_names_the_tool() {
    let upstream = MockServer::start().await;
    let server = mock_server(&upstream);

    let result = server.call_tool("get_weather", json!({})).await;
    assert_eq!(text(&result), "Error: Unknown tool: get_weather");
    assert_ne!(result["isError"], json!(true));
    assert!(upstream.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_tower_by_id_requires_id() {
    let upstream = MockServer::start().await;
    let server = mock_server(&upstream);

    let result = server.call_tool("get_tower_by_id", json!({})).await;
    assert_eq!(text(&result), "Error: id parameter is required");
}

#[tokio::test]
async fn test_tower_by_id_fetches_once() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "radio": "LTE", "mcc": 655, "net": 1, "area": 100, "cell": 2001,
            "lon": 28.0473, "lat": -26.2041
        })))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server.call_tool("get_tower_by_id", json!({"id": 42})).await;

    let tower: Value = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(tower["id"], 42);
    assert_eq!(tower["radio"], "LTE");
}

#[tokio::test]
async fn test_location_with_missing_field_lists_all_four() {
    let upstream = MockServer::start().await;
    let server = mock_server(&upstream);

    let result = server
        .call_tool(
            "get_towers_by_location",
            json!({"min_lon": 18.1, "max_lon": 18.9, "min_lat": -34.2}),
        )
        .await;

    let message = text(&result);
    assert!(message.starts_with("Error: All parameters required"));
    for field in ["min_lon", "max_lon", "min_lat", "max_lat"] {
        assert!(message.contains(field), "{} missing from {}", field, message);
    }
}

#[tokio::test]
async fn test_location_translates_query_names() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers/location"))
        .and(query_param("minLon", "18.1"))
        .and(query_param("maxLon", "18.9"))
        .and(query_param("minLat", "-34.2"))
        .and(query_param("maxLat", "-33.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server
        .call_tool(
            "get_towers_by_location",
            json!({"min_lon": 18.1, "max_lon": 18.9, "min_lat": -34.2, "max_lat": -33.7}),
        )
        .await;
    assert_eq!(text(&result), "[]");
}

#[tokio::test]
async fn test_create_posts_exactly_supplied_fields() {
    let upstream = MockServer::start().await;
    let record = json!({
        "radio": "GSM", "mcc": 655, "net": 10, "area": 3, "cell": 9, "lon": 18.4, "lat": -33.9
    });
    Mock::given(method("POST"))
        .and(path("/api/cell-towers"))
        .and(body_json(&record))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 501})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server.call_tool("create_tower", record.clone()).await;

    let message = text(&result);
    assert!(message.starts_with("Tower created successfully:\n"));
    assert!(message.contains("\"id\": 501"));
}

#[tokio::test]
async fn test_create_forwards_unmodelled_fields_verbatim() {
    let upstream = MockServer::start().await;
    let record = json!({
        "radio": "LTE", "mcc": 655, "net": 1, "area": 2, "cell": 3,
        "lon": 18, "lat": -33, "unit": 0, "changeable": 1, "range": null
    });
    Mock::given(method("POST"))
        .and(path("/api/cell-towers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 502})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server.call_tool("create_tower", record).await;
    assert!(text(&result).starts_with("Tower created successfully:\n"));

    let requests = upstream.received_requests().await.unwrap_or_default();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        sent,
        json!({
            "radio": "LTE", "mcc": 655, "net": 1, "area": 2, "cell": 3,
            "lon": 18, "lat": -33, "unit": 0, "changeable": 1
        })
    );
}

#[tokio::test]
async fn test_update_and_delete() {
    let upstream = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/cell-towers/7"))
        .and(body_json(json!({"samples": 12})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "samples": 12})))
        .expect(1)
        .mount(&upstream)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/cell-towers/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);

    let result = server
        .call_tool("update_tower", json!({"id": 7, "updates": {"samples": 12}}))
        .await;
    assert!(text(&result).starts_with("Tower updated successfully:\n"));

    let result = server.call_tool("delete_tower", json!({"id": 7})).await;
    assert_eq!(text(&result), "Tower 7 deleted successfully");
}

#[tokio::test]
async fn test_coverage_reference_statistics() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers/radio/LTE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"radio": "LTE", "averageSignal": -80, "samples": 10},
            {"radio": "LTE", "averageSignal": -60, "samples": 20},
            {"radio": "GSM", "samples": 5}
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server
        .call_tool("analyze_coverage", json!({"radio": "LTE", "min_lon": 1.0}))
        .await;

    let analysis: Value = serde_json::from_str(text(&result)).unwrap();
    assert_eq!(analysis["total_towers"], 3);
    assert_eq!(analysis["radio_distribution"]["LTE"], 2);
    assert_eq!(analysis["radio_distribution"]["GSM"], 1);
    assert_eq!(analysis["signal_stats"]["strongest"], 0);
    assert_eq!(analysis["signal_stats"]["weakest"], -80);
    assert_eq!(analysis["sample_stats"]["total_samples"], 35);
}

#[tokio::test]
async fn test_coverage_empty_fetch() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server.call_tool("analyze_coverage", json!({})).await;
    assert_eq!(text(&result), "No towers found matching the criteria");
}

#[tokio::test]
async fn test_close_twice_then_request_recreates_client() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers/mcc/655"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .expect(2)
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let client = server.dispatcher().client().clone();

    server.call_tool("get_towers_by_mcc", json!({"mcc": 655})).await;
    assert!(client.is_connected().await);

    server.shutdown().await;
    server.shutdown().await;
    assert!(!client.is_connected().await);

    let result = server.call_tool("get_towers_by_mcc", json!({"mcc": 655})).await;
    assert!(text(&result).contains("\"id\": 1"));
    assert!(client.is_connected().await);
}

#[tokio::test]
async fn test_unreachable_upstream_is_error_envelope() {
    let server = server_for("http://127.0.0.1:1/api/cell-towers".to_string());

    let result = server.call_tool("get_all_towers", json!({})).await;
    assert!(text(&result).starts_with("Error: Failed to connect to cell tower API"));
}

#[tokio::test]
async fn test_upstream_status_is_error_envelope() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cell-towers/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Tower not found"))
        .mount(&upstream)
        .await;

    let server = mock_server(&upstream);
    let result = server.call_tool("get_tower_by_id", json!({"id": 99})).await;
    assert_eq!(
        text(&result),
        "Error: API request failed with status 404: Tower not found"
    );
}
