mod costs;
mod currency;
mod inputs;
mod metrics;
mod scenario;

pub use costs::{
    CapitalCategory, CapitalCostItem, CostContext, CostItem, CostKind, CostLedger,
};
pub use currency::{Currency, CurrencySettings};
pub use inputs::{InputField, SimulationInputs};
pub use metrics::SimulationMetrics;
pub use scenario::Scenario;
