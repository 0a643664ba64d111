//! Integration tests for the metrics engine and sensitivity analysis
//!
//! Tests are organized by topic:
//! - `engine` - Metric formula regression checkpoints and numeric guarantees
//! - `scenarios` - Preset snapshots and full-ledger evaluations
//! - `sweep` - Sample stepping, series contents, and insight derivation

mod scenarios;
mod sweep;
