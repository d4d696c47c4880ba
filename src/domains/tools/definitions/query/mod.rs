//! Read-only tower queries.
//!
//! One tool per upstream GET route: full listing, paging, lookup by ID and
//! the radio, MCC, location, signal and sample-count filters.

pub mod all_towers;
pub mod by_id;
pub mod by_location;
pub mod by_mcc;
pub mod by_radio;
pub mod by_samples;
pub mod by_signal;
pub mod paged;

pub use all_towers::GetAllTowersTool;
pub use by_id::{GetTowerByIdParams, GetTowerByIdTool};
pub use by_location::GetTowersByLocationTool;
pub use by_mcc::{GetTowersByMccParams, GetTowersByMccTool};
pub use by_radio::{GetTowersByRadioParams, GetTowersByRadioTool};
pub use by_samples::{GetTowersByMinSamplesParams, GetTowersByMinSamplesTool};
pub use by_signal::{GetTowersBySignalRangeParams, GetTowersBySignalRangeTool};
pub use paged::{GetTowersPagedParams, GetTowersPagedTool, SortDirection};
