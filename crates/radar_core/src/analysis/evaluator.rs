//! Sweep evaluator - re-runs the engine across a sample range

use serde::{Deserialize, Serialize};

use crate::engine::compute_metrics;
use crate::model::{CostContext, InputField, SimulationInputs};

use super::SweepConfig;
use super::insights::SweepInsights;

/// Metrics recorded at one sample value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    /// The sample value substituted into the swept field
    pub value: f64,
    pub ltv: f64,
    pub cac: f64,
    pub net_profit_12_months: f64,
    pub gross_margin_percentage: f64,
    pub payback_period: f64,
}

/// The full, ascending result series of one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    pub field: InputField,
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Derive base/best/worst insights relative to the caller's live value
    /// of the swept field. `None` only when the series is empty.
    #[must_use]
    pub fn insights(&self, current_value: f64) -> Option<SweepInsights> {
        SweepInsights::from_series(self, current_value)
    }
}

/// Run one sweep: for each sample value, clone the base snapshot, override
/// the selected field, and evaluate the engine with the caller's cost
/// context unchanged.
///
/// Pure computation, O(samples) engine calls, no I/O. Cheap enough to run
/// on every interaction without batching.
#[must_use]
pub fn sweep(base: &SimulationInputs, config: &SweepConfig, costs: &CostContext) -> SweepSeries {
    let points = config
        .range
        .values()
        .into_iter()
        .map(|value| {
            let sampled = base.with_field(config.field, value);
            let metrics = compute_metrics(&sampled, costs);
            SweepPoint {
                value,
                ltv: metrics.ltv,
                cac: metrics.cac,
                net_profit_12_months: metrics.net_profit_12_months,
                gross_margin_percentage: metrics.gross_margin_percentage,
                payback_period: metrics.payback_period,
            }
        })
        .collect();

    SweepSeries {
        field: config.field,
        points,
    }
}
