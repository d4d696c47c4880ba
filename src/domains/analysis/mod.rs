//! Client-side analysis over fetched tower records.
//!
//! Nothing here performs I/O; the tools fetch records and hand them over.

pub mod coverage;

pub use coverage::{CoverageAnalysis, CoverageError, SampleStats, SignalStats, analyze};
