//! veristat-core: Inferential statistics for the veristat calculator
//!
//! This crate provides the numeric core behind the interactive calculator:
//! descriptive sample statistics, Levene's test for variance homogeneity,
//! the independent two-sample t-test, and Pearson correlation.

pub mod descriptive;
pub mod errors;
pub mod tests;

pub use descriptive::{Sample, SampleStatistics};
pub use errors::{StatsError, StatsResult};
pub use tests::{LeveneResult, TTestResult};
