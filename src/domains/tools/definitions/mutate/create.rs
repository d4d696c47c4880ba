//! Create a tower record.
//!
//! The typed fields only validate the request. The body sent upstream is the
//! caller's argument map itself (nulls already stripped), so fields this
//! server does not model, such as `unit` or `changeable`, still reach the API
//! and numbers keep the form they were given in.

use std::borrow::Cow;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::domains::api::{ApiClient, Endpoint};
use crate::domains::tools::definitions::common::{pretty_json, success_result};
use crate::domains::tools::{ToolResult, TowerTool};

/// The fields a new tower must (and may) carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CreateTowerParams {
    #[schemars(description = "Radio type (LTE, GSM, UMTS, CDMA)")]
    pub radio: String,

    #[schemars(description = "Mobile Country Code")]
    pub mcc: i64,

    #[schemars(description = "Network code")]
    pub net: i64,

    #[schemars(description = "Location Area Code")]
    pub area: i64,

    #[schemars(description = "Cell ID")]
    pub cell: i64,

    #[schemars(description = "Longitude")]
    pub lon: f64,

    #[schemars(description = "Latitude")]
    pub lat: f64,

    #[schemars(description = "Range in meters")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i64>,

    #[schemars(description = "Number of samples")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<i64>,

    #[schemars(description = "Average signal strength in dBm")]
    #[serde(
        rename = "averageSignal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub average_signal: Option<i64>,
}

/// A validated creation request: the typed view plus the body to send.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTowerRequest {
    pub tower: CreateTowerParams,
    pub body: JsonObject,
}

impl<'de> Deserialize<'de> for CreateTowerRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = JsonObject::deserialize(deserializer)?;
        let tower = CreateTowerParams::deserialize(Value::Object(body.clone()))
            .map_err(D::Error::custom)?;
        Ok(Self { tower, body })
    }
}

// Clients see the typed fields; the passthrough body has no schema of its own.
impl JsonSchema for CreateTowerRequest {
    fn schema_name() -> Cow<'static, str> {
        CreateTowerParams::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        CreateTowerParams::json_schema(generator)
    }
}

#[derive(Debug, Clone)]
pub struct CreateTowerTool;

#[async_trait]
impl TowerTool for CreateTowerTool {
    const NAME: &'static str = "create_tower";
    const DESCRIPTION: &'static str = "Create a new cell tower entry in the database";
    const REQUIRED: &'static [&'static str] =
        &["radio", "mcc", "net", "area", "cell", "lon", "lat"];
    type Params = CreateTowerRequest;

    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult> {
        let CreateTowerRequest { tower, body } = params;
        info!(
            "Creating new tower: {} mcc={} net={} area={} cell={}",
            tower.radio, tower.mcc, tower.net, tower.area, tower.cell
        );

        let data = client.post(&Endpoint::root(), &Value::Object(body)).await?;

        Ok(success_result(format!(
            "Tower created successfully:\n{}",
            pretty_json(&data)?
        )))
    }
}
