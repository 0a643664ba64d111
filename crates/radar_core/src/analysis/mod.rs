//! Sensitivity analysis over a single input variable.
//!
//! A sweep holds the working snapshot fixed, varies one selected field
//! across a numeric range, and re-runs the metrics engine at each sample.
//! The result is a fully materialized ascending series: callers need
//! random access for highlighting the current position and for the
//! best/worst reduction, so nothing here is lazy.
//!
//! ```ignore
//! use radar_core::analysis::{SweepConfig, SweepInsights, sweep};
//! use radar_core::model::{CostContext, InputField, Scenario};
//!
//! let inputs = Scenario::Realistic.inputs();
//! let config = SweepConfig::for_field(InputField::ChurnRate);
//! let series = sweep(&inputs, &config, &CostContext::default());
//! let insights = series.insights(inputs.churn_rate);
//! ```
//!
//! The module also derives presentation-free judgment calls from a metrics
//! record: risk indicators with safe/warning/danger thresholds, and
//! strategic advice triggered by the same rules the decision dashboard uses.

mod advice;
mod config;
mod evaluator;
mod insights;

pub use advice::{Advice, AdviceKind, RiskIndicator, RiskStatus, risk_indicators, strategic_advice};
pub use config::{SweepConfig, SweepRange};
pub use evaluator::{SweepPoint, SweepSeries, sweep};
pub use insights::SweepInsights;
