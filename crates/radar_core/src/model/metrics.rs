//! Engine output record

use serde::{Deserialize, Serialize};

/// The complete set of financial metrics produced by one engine evaluation.
///
/// Recomputed fresh on every call and replaced wholesale by the caller; no
/// value here carries identity between evaluations. No rounding is applied;
/// formatting is the presentation layer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// Cost of acquiring one customer through the partner channel
    pub cac: f64,
    /// Net lifetime value of one acquired customer
    pub ltv: f64,
    /// Absolute gross margin per customer (equals LTV)
    pub gross_margin: f64,
    /// Gross margin as a share of lifetime revenue (%)
    pub gross_margin_percentage: f64,
    /// Months of gross monthly contribution needed to recover CAC
    pub payback_period: f64,
    /// Subscribers needed for steady-state monthly profit to cover the
    /// reference fixed-cost figure
    pub break_even_subscribers: f64,
    /// Population-level profit after 3 months, before fixed costs
    pub expected_profit_3_months: f64,
    /// Population-level profit after 6 months, before fixed costs
    pub expected_profit_6_months: f64,
    /// Population-level profit after 12 months, before fixed costs
    pub expected_profit_12_months: f64,
    /// Subscribers acquired across the partner network (floored at 1)
    pub total_subscribers: f64,
    /// Lifetime revenue across all subscribers
    pub total_revenue: f64,
    /// Echo of the fixed-cost aggregate supplied by the caller
    pub total_monthly_fixed_costs: f64,
    /// Echo of the depreciation aggregate supplied by the caller
    pub total_monthly_depreciation: f64,
    /// Echo of the capital-investment aggregate supplied by the caller
    pub total_capital_investment: f64,
    /// Profit after 3 months net of fixed costs and depreciation
    pub net_profit_3_months: f64,
    /// Profit after 6 months net of fixed costs and depreciation
    pub net_profit_6_months: f64,
    /// Profit after 12 months net of fixed costs and depreciation
    pub net_profit_12_months: f64,
}

impl SimulationMetrics {
    /// LTV over CAC; a CAC of zero counts as 1 so the ratio stays finite
    #[must_use]
    pub fn ltv_cac_ratio(&self) -> f64 {
        if self.cac == 0.0 {
            self.ltv
        } else {
            self.ltv / self.cac
        }
    }

    /// True when every field is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.cac,
            self.ltv,
            self.gross_margin,
            self.gross_margin_percentage,
            self.payback_period,
            self.break_even_subscribers,
            self.expected_profit_3_months,
            self.expected_profit_6_months,
            self.expected_profit_12_months,
            self.total_subscribers,
            self.total_revenue,
            self.total_monthly_fixed_costs,
            self.total_monthly_depreciation,
            self.total_capital_investment,
            self.net_profit_3_months,
            self.net_profit_6_months,
            self.net_profit_12_months,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
