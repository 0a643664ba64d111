//! Unit-economics simulation library for partner-driven subscription businesses
//!
//! This crate provides the calculation kernel behind a "what-if" decision
//! simulator for referral/partner programs. It supports:
//! - A deterministic metrics engine (LTV, CAC, margins, payback, break-even)
//! - Cost ledgers for recurring fixed costs and depreciating capital assets
//! - One-variable sensitivity sweeps with best/worst/base insight derivation
//! - Named scenario presets (optimistic, realistic, pessimistic)
//! - Risk indicators and strategic advice derived from the computed metrics
//!
//! The engine is a pure function: every call is independent, performs no I/O,
//! and the same inputs always produce identical output. Callers own the input
//! snapshot and cost ledgers and re-run the engine on every change.
//!
//! ```ignore
//! use radar_core::analysis::{SweepConfig, sweep};
//! use radar_core::engine::compute_metrics;
//! use radar_core::model::{CostLedger, InputField, Scenario};
//!
//! let inputs = Scenario::Realistic.inputs();
//! let ledger = CostLedger::with_defaults();
//! let metrics = compute_metrics(&inputs, &ledger.cost_context());
//!
//! let config = SweepConfig::for_field(InputField::ChurnRate);
//! let series = sweep(&inputs, &config, &ledger.cost_context());
//! let insights = series.insights(inputs.churn_rate);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod engine;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{
    Advice, AdviceKind, RiskIndicator, RiskStatus, SweepConfig, SweepInsights, SweepPoint,
    SweepRange, SweepSeries, risk_indicators, strategic_advice, sweep,
};
pub use engine::compute_metrics;
pub use model::{
    CapitalCategory, CapitalCostItem, CostContext, CostItem, CostKind, CostLedger, Currency,
    CurrencySettings, InputField, Scenario, SimulationInputs, SimulationMetrics,
};
