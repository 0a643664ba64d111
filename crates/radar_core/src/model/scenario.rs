//! Named scenario presets
//!
//! Each scenario is a complete canned input snapshot. Selecting one replaces
//! the caller's working snapshot wholesale; presets are never merged.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::SimulationInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scenario {
    Optimistic,
    Realistic,
    Pessimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Realistic, Scenario::Pessimistic];

    /// The complete input snapshot this preset stands for
    #[must_use]
    pub fn inputs(self) -> SimulationInputs {
        match self {
            Scenario::Realistic => SimulationInputs {
                first_month_commission: 30.0,
                recurring_commission: 15.0,
                upfront_fee_per_partner: 500.0,
                avg_subscription_price: 150.0,
                influencer_discount: 10.0,
                conversion_rate: 2.5,
                churn_rate: 10.0,
                avg_retention_months: 6.0,
                refund_rate: 3.0,
                infra_cost_per_user: 15.0,
                payment_gateway_fee: 2.5,
                support_cost_per_user: 10.0,
                partner_count: 50.0,
                avg_referrals_per_partner: 10.0,
            },
            Scenario::Optimistic => SimulationInputs {
                first_month_commission: 30.0,
                recurring_commission: 10.0,
                upfront_fee_per_partner: 0.0,
                avg_subscription_price: 150.0,
                influencer_discount: 5.0,
                conversion_rate: 5.0,
                churn_rate: 5.0,
                avg_retention_months: 10.0,
                refund_rate: 1.0,
                infra_cost_per_user: 10.0,
                payment_gateway_fee: 2.5,
                support_cost_per_user: 5.0,
                partner_count: 100.0,
                avg_referrals_per_partner: 20.0,
            },
            Scenario::Pessimistic => SimulationInputs {
                first_month_commission: 40.0,
                recurring_commission: 25.0,
                upfront_fee_per_partner: 2_000.0,
                avg_subscription_price: 150.0,
                influencer_discount: 20.0,
                conversion_rate: 1.0,
                churn_rate: 20.0,
                avg_retention_months: 3.0,
                refund_rate: 10.0,
                infra_cost_per_user: 25.0,
                payment_gateway_fee: 2.5,
                support_cost_per_user: 20.0,
                partner_count: 20.0,
                avg_referrals_per_partner: 5.0,
            },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Optimistic => "Optimistic",
            Scenario::Realistic => "Realistic",
            Scenario::Pessimistic => "Pessimistic",
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Scenario::Optimistic),
            "realistic" => Ok(Scenario::Realistic),
            "pessimistic" => Ok(Scenario::Pessimistic),
            _ => Err(ParseError::UnknownScenario(s.to_string())),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
