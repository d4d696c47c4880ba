//! Analysis tools built on top of the tower queries.

pub mod coverage;

pub use coverage::{AnalyzeCoverageParams, AnalyzeCoverageTool, CoverageFilter};
