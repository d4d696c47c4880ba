//! Tower record as exchanged with the upstream service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// A cell tower record.
///
/// Every field is optional: the upstream service owns the record and this
/// server only reads what it needs. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tower {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Radio technology (LTE, GSM, UMTS, CDMA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio: Option<String>,

    /// Mobile Country Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<i64>,

    /// Mobile Network Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<i64>,

    /// Location Area Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Coverage range in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub changeable: Option<i64>,

    /// Average signal strength in dBm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_signal: Option<i64>,
}

impl Tower {
    /// Decode a list response.
    ///
    /// An empty body (`null`, e.g. a 204 from the list endpoint) is an empty list.
    pub fn list_from_value(value: Value) -> ApiResult<Vec<Self>> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value)
            .map_err(|e| ApiError::invalid_response(format!("expected a list of towers: {}", e)))
    }
}
