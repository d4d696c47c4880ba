//! Tool handler traits.
//!
//! Tools are written against [`TowerTool`]: a typed parameter struct (whose
//! `schemars` schema becomes the tool's input schema), the list of required
//! arguments and an async `execute`. [`TypedHandler`] erases that type so
//! the registry can keep every tool in one name-indexed table of
//! [`ToolHandler`] trait objects.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;

use super::error::{ToolError, ToolResult};
use crate::domains::api::ApiClient;

/// A strongly typed tool backed by the cell tower API.
#[async_trait]
pub trait TowerTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments that must be present and non-null.
    ///
    /// Checked against the generated schema when the tool is registered.
    const REQUIRED: &'static [&'static str];

    /// Parameters deserialized from the argument bag.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool against the upstream API.
    async fn execute(params: Self::Params, client: &ApiClient) -> ToolResult<CallToolResult>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate the argument bag and deserialize it into [`Self::Params`].
    fn parse_params(mut arguments: JsonObject) -> ToolResult<Self::Params> {
        check_required(&arguments, Self::REQUIRED)?;

        // Explicit nulls mean "not supplied" so serde defaults still apply.
        arguments.retain(|_, value| !value.is_null());

        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }
}

/// Report missing required arguments.
///
/// A single required field is named on its own; when a tool has several,
/// the message lists all of them.
pub fn check_required(arguments: &JsonObject, required: &[&str]) -> ToolResult<()> {
    let missing = required
        .iter()
        .any(|field| arguments.get(*field).is_none_or(Value::is_null));

    if !missing {
        return Ok(());
    }

    match required {
        [field] => Err(ToolError::invalid_arguments(format!(
            "{} parameter is required",
            field
        ))),
        fields => Err(ToolError::invalid_arguments(format!(
            "All parameters required: {}",
            fields.join(", ")
        ))),
    }
}

/// Object-safe view of a tool, used by the registry's lookup table.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &'static str;

    /// Get the required argument names of this tool.
    fn required(&self) -> &'static [&'static str];

    /// Get the MCP metadata of this tool.
    fn to_tool(&self) -> Tool;

    /// Validate the arguments and execute the tool.
    async fn call(&self, arguments: JsonObject, client: &ApiClient) -> ToolResult<CallToolResult>;
}

/// Adapter from a [`TowerTool`] to a [`ToolHandler`] trait object.
pub struct TypedHandler<T> {
    _tool: PhantomData<fn() -> T>,
}

impl<T: TowerTool> TypedHandler<T> {
    pub fn new() -> Self {
        Self { _tool: PhantomData }
    }
}

impl<T: TowerTool> Default for TypedHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: TowerTool> ToolHandler for TypedHandler<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn required(&self) -> &'static [&'static str] {
        T::REQUIRED
    }

    fn to_tool(&self) -> Tool {
        T::to_tool()
    }

    async fn call(&self, arguments: JsonObject, client: &ApiClient) -> ToolResult<CallToolResult> {
        let params = T::parse_params(arguments)?;
        T::execute(params, client).await
    }
}
