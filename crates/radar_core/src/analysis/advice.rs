//! Risk indicators and strategic advice derived from a metrics record

use serde::{Deserialize, Serialize};

use crate::model::{SimulationInputs, SimulationMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Safe,
    Warning,
    Danger,
}

/// One viability gauge with its judged status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIndicator {
    pub label: &'static str,
    pub value: String,
    pub status: RiskStatus,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Info,
    Warning,
    Positive,
}

/// One actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub title: &'static str,
    pub content: &'static str,
    pub kind: AdviceKind,
}

/// The three viability gauges: LTV:CAC ratio, gross margin, payback period.
#[must_use]
pub fn risk_indicators(metrics: &SimulationMetrics) -> Vec<RiskIndicator> {
    let ratio = metrics.ltv_cac_ratio();
    vec![
        RiskIndicator {
            label: "LTV to CAC ratio",
            value: format!("{ratio:.1}x"),
            status: if ratio >= 3.0 {
                RiskStatus::Safe
            } else if ratio >= 2.0 {
                RiskStatus::Warning
            } else {
                RiskStatus::Danger
            },
            description: "A customer should return at least three times what acquiring them cost.",
        },
        RiskIndicator {
            label: "Gross margin",
            value: format!("{:.1}%", metrics.gross_margin_percentage),
            status: if metrics.gross_margin_percentage >= 40.0 {
                RiskStatus::Safe
            } else if metrics.gross_margin_percentage >= 20.0 {
                RiskStatus::Warning
            } else {
                RiskStatus::Danger
            },
            description: "The share of customer revenue left to cover fixed costs and growth.",
        },
        RiskIndicator {
            label: "Payback period",
            value: format!("{:.1} months", metrics.payback_period),
            status: if metrics.payback_period <= 3.0 {
                RiskStatus::Safe
            } else if metrics.payback_period <= 6.0 {
                RiskStatus::Warning
            } else {
                RiskStatus::Danger
            },
            description: "Time needed to earn back the cost of acquiring a customer.",
        },
    ]
}

/// Rule-based recommendations for the current plan.
///
/// Always returns at least one entry; when no rule fires, a balanced-plan
/// note stands in.
#[must_use]
pub fn strategic_advice(inputs: &SimulationInputs, metrics: &SimulationMetrics) -> Vec<Advice> {
    let mut advices = Vec::new();
    let ratio = metrics.ltv_cac_ratio();

    if ratio < 2.0 {
        advices.push(Advice {
            title: "Improve unit economics",
            content: "The LTV to CAC ratio is too low. Cut the first-month commission or the \
                      fixed partner fees before the channel drains cash.",
            kind: AdviceKind::Warning,
        });
    } else if ratio > 5.0 {
        advices.push(Advice {
            title: "Room for aggressive growth",
            content: "The numbers support raising commissions or partner bonuses to attract \
                      larger partners without endangering profitability.",
            kind: AdviceKind::Positive,
        });
    }

    if inputs.churn_rate > 15.0 {
        advices.push(Advice {
            title: "Focus on retention",
            content: "Monthly churn is very high. Marketing spend is wasted until content \
                      quality and the product experience improve.",
            kind: AdviceKind::Warning,
        });
    }

    if inputs.upfront_fee_per_partner > 1_000.0 && inputs.avg_referrals_per_partner < 10.0 {
        advices.push(Advice {
            title: "Rethink the upfront fees",
            content: "High upfront fees are going to partners who bring too few subscribers. \
                      Try a commission-only model to reduce risk.",
            kind: AdviceKind::Info,
        });
    }

    if metrics.gross_margin_percentage < 30.0 {
        advices.push(Advice {
            title: "Raise profit margins",
            content: "Operating costs and commissions consume most of the revenue. Reduce \
                      infrastructure cost or raise the subscription price.",
            kind: AdviceKind::Warning,
        });
    }

    if advices.is_empty() {
        advices.push(Advice {
            title: "Balanced plan",
            content: "The numbers show a good balance between growth and profitability. Keep \
                      monitoring referral quality per partner.",
            kind: AdviceKind::Info,
        });
    }

    advices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_metrics;
    use crate::model::{CostContext, Scenario};

    #[test]
    fn test_pessimistic_preset_trips_warnings() {
        let inputs = Scenario::Pessimistic.inputs();
        let metrics = compute_metrics(&inputs, &CostContext::default());
        let advices = strategic_advice(&inputs, &metrics);
        assert!(advices.iter().any(|a| a.kind == AdviceKind::Warning));
        // Churn of 20% fires the retention rule
        assert!(advices.iter().any(|a| a.title == "Focus on retention"));
    }

    #[test]
    fn test_advice_never_empty() {
        let inputs = Scenario::Optimistic.inputs();
        let metrics = compute_metrics(&inputs, &CostContext::default());
        assert!(!strategic_advice(&inputs, &metrics).is_empty());
    }

    #[test]
    fn test_indicator_statuses_follow_thresholds() {
        let inputs = Scenario::Realistic.inputs();
        let metrics = compute_metrics(&inputs, &CostContext::default());
        let indicators = risk_indicators(&metrics);
        assert_eq!(indicators.len(), 3);

        // Realistic preset: ratio ~4.8x, margin ~55%, payback under a month
        assert_eq!(indicators[0].status, RiskStatus::Safe);
        assert_eq!(indicators[1].status, RiskStatus::Safe);
        assert_eq!(indicators[2].status, RiskStatus::Safe);
    }

    #[test]
    fn test_low_ratio_flagged_danger() {
        let mut inputs = Scenario::Pessimistic.inputs();
        inputs.upfront_fee_per_partner = 5_000.0;
        let metrics = compute_metrics(&inputs, &CostContext::default());
        let indicators = risk_indicators(&metrics);
        assert_eq!(indicators[0].status, RiskStatus::Danger);
    }
}
