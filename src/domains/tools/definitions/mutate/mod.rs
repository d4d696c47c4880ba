//! Tools that change tower records upstream.

pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateTowerParams, CreateTowerRequest, CreateTowerTool};
pub use delete::{DeleteTowerParams, DeleteTowerTool};
pub use update::{UpdateTowerParams, UpdateTowerTool};
