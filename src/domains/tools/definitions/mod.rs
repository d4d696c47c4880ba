//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod analysis;
pub mod common;
pub mod mutate;
pub mod query;

pub use analysis::AnalyzeCoverageTool;
pub use mutate::{CreateTowerTool, DeleteTowerTool, UpdateTowerTool};
pub use query::{
    GetAllTowersTool, GetTowerByIdTool, GetTowersByLocationTool, GetTowersByMccTool,
    GetTowersByMinSamplesTool, GetTowersByRadioTool, GetTowersBySignalRangeTool,
    GetTowersPagedTool,
};
