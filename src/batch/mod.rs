//! Batch orchestration: load a manifest, render every entry with one renderer variant, and
//! report which entries failed.

/// Manifest model and validation.
pub mod manifest;
/// Per-entry outcomes and the batch summary.
pub mod report;
/// The batch driver.
pub mod runner;
