//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - The ordered catalog of tool descriptors (for `tools/list`)
//! - A name-indexed table of handlers (for `tools/call`)
//! - Registration-time checks of each tool's schema

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;

use super::definitions::{
    AnalyzeCoverageTool, CreateTowerTool, DeleteTowerTool, GetAllTowersTool, GetTowerByIdTool,
    GetTowersByLocationTool, GetTowersByMccTool, GetTowersByMinSamplesTool, GetTowersByRadioTool,
    GetTowersBySignalRangeTool, GetTowersPagedTool, UpdateTowerTool,
};
use super::error::{ToolError, ToolResult};
use super::handlers::{ToolHandler, TowerTool, TypedHandler};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    /// Descriptors in registration order.
    tools: Vec<Tool>,

    /// Handlers by tool name.
    handlers: HashMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            tools: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Create the registry of all cell tower tools.
    ///
    /// Fails if any tool's schema disagrees with its declared required fields.
    pub fn new() -> ToolResult<Self> {
        let mut registry = Self::empty();
        registry.register::<GetAllTowersTool>()?;
        registry.register::<GetTowersPagedTool>()?;
        registry.register::<GetTowerByIdTool>()?;
        registry.register::<GetTowersByRadioTool>()?;
        registry.register::<GetTowersByMccTool>()?;
        registry.register::<GetTowersByLocationTool>()?;
        registry.register::<GetTowersBySignalRangeTool>()?;
        registry.register::<GetTowersByMinSamplesTool>()?;
        registry.register::<CreateTowerTool>()?;
        registry.register::<UpdateTowerTool>()?;
        registry.register::<DeleteTowerTool>()?;
        registry.register::<AnalyzeCoverageTool>()?;
        Ok(registry)
    }

    /// Register a tool, validating its schema first.
    pub fn register<T: TowerTool>(&mut self) -> ToolResult<()> {
        if self.handlers.contains_key(T::NAME) {
            return Err(ToolError::schema(T::NAME, "tool registered twice"));
        }

        let handler: Arc<dyn ToolHandler> = Arc::new(TypedHandler::<T>::new());
        let tool = handler.to_tool();
        validate_schema(&tool, handler.required())?;

        self.tools.push(tool);
        self.handlers.insert(T::NAME, handler);
        Ok(())
    }

    /// Get all tools as Tool models (metadata), in catalog order.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// Look up a handler by tool name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Check that the schema's `required` array matches the declared fields
/// and that every declared field is a schema property.
fn validate_schema(tool: &Tool, required: &[&str]) -> ToolResult<()> {
    let schema = &tool.input_schema;

    let schema_required: BTreeSet<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let declared: BTreeSet<&str> = required.iter().copied().collect();

    if schema_required != declared {
        return Err(ToolError::schema(
            tool.name.to_string(),
            format!(
                "declared required {:?} but schema requires {:?}",
                declared, schema_required
            ),
        ));
    }

    let properties = schema.get("properties").and_then(Value::as_object);
    for field in required {
        if !properties.is_some_and(|p| p.contains_key(*field)) {
            return Err(ToolError::schema(
                tool.name.to_string(),
                format!("required field '{}' is not a schema property", field),
            ));
        }
    }

    if tool.description.as_deref().is_none_or(str::is_empty) {
        return Err(ToolError::schema(tool.name.to_string(), "missing description"));
    }

    Ok(())
}
