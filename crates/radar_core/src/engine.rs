//! Unit-economics metrics engine
//!
//! A single pure function maps an input snapshot plus cost aggregates to a
//! complete metrics record. There is no internal state and no failure path:
//! division-by-zero hazards are absorbed by floor clamps, so pathological
//! inputs yield degenerate but finite numbers rather than errors.

use crate::model::{CostContext, SimulationInputs, SimulationMetrics};

/// Reference monthly fixed-cost figure the break-even estimate is quoted
/// against. Deliberately independent of the caller-supplied ledger totals.
const BREAK_EVEN_REFERENCE_FIXED_COSTS: f64 = 50_000.0;

/// Smallest monthly contribution used as a denominator
const MIN_MONTHLY_CONTRIBUTION: f64 = 0.1;

/// Compute the full metrics record for one input snapshot.
///
/// All rates in `inputs` are percentages. The subscriber population is
/// floored at 1 so the per-subscriber amortization of upfront partner fees
/// stays finite even with zero partners or zero referrals; the floor is a
/// numeric clamp, not a business assumption.
///
/// Deterministic: identical arguments produce a bit-identical record.
#[must_use]
pub fn compute_metrics(inputs: &SimulationInputs, costs: &CostContext) -> SimulationMetrics {
    let effective_price = inputs.avg_subscription_price * (1.0 - inputs.influencer_discount / 100.0);
    let total_subscribers = (inputs.partner_count * inputs.avg_referrals_per_partner).max(1.0);

    // Per-subscriber monthly flows
    let monthly_revenue = effective_price * (1.0 - inputs.payment_gateway_fee / 100.0);
    let monthly_op_cost = inputs.infra_cost_per_user + inputs.support_cost_per_user;

    // Aggregates over the average retention window
    let total_revenue_life = monthly_revenue * inputs.avg_retention_months;
    let total_op_cost_life = monthly_op_cost * inputs.avg_retention_months;

    // Commission: first month once, recurring rate for every month after
    let first_month_comm = effective_price * inputs.first_month_commission / 100.0;
    let recurring_comm =
        effective_price * inputs.recurring_commission / 100.0 * (inputs.avg_retention_months - 1.0);
    let total_comm_life = first_month_comm + recurring_comm;

    // Upfront partner fees amortized across the acquired population
    let total_upfront_fees = inputs.partner_count * inputs.upfront_fee_per_partner;
    let upfront_fee_per_user = total_upfront_fees / total_subscribers;

    let ltv = (total_revenue_life - total_op_cost_life - total_comm_life - upfront_fee_per_user)
        * (1.0 - inputs.refund_rate / 100.0);

    // Acquisition cost is the first-month commission plus the amortized
    // upfront fee; recurring commission is an ongoing cost of revenue
    let cac = first_month_comm + upfront_fee_per_user;

    let gross_margin = ltv;
    let gross_margin_percentage = ltv / total_revenue_life.max(1.0) * 100.0;

    // Steady-state monthly profit per retained subscriber after month one
    let monthly_net =
        monthly_revenue - monthly_op_cost - effective_price * inputs.recurring_commission / 100.0;

    // Payback is quoted against gross contribution, before recurring commission
    let payback_period =
        cac / (monthly_revenue - monthly_op_cost).max(MIN_MONTHLY_CONTRIBUTION);

    let expected_profit_at = |months: f64| {
        monthly_net * months * total_subscribers
            - total_subscribers * first_month_comm
            - total_upfront_fees
    };
    let expected_profit_3_months = expected_profit_at(3.0);
    let expected_profit_6_months = expected_profit_at(6.0);
    let expected_profit_12_months = expected_profit_at(12.0);

    let monthly_overhead = costs.monthly_fixed_costs + costs.monthly_depreciation;
    let net_profit_3_months = expected_profit_3_months - monthly_overhead * 3.0;
    let net_profit_6_months = expected_profit_6_months - monthly_overhead * 6.0;
    let net_profit_12_months = expected_profit_12_months - monthly_overhead * 12.0;

    let break_even_subscribers =
        BREAK_EVEN_REFERENCE_FIXED_COSTS / monthly_net.max(MIN_MONTHLY_CONTRIBUTION);

    SimulationMetrics {
        cac,
        ltv,
        gross_margin,
        gross_margin_percentage,
        payback_period,
        break_even_subscribers,
        expected_profit_3_months,
        expected_profit_6_months,
        expected_profit_12_months,
        total_subscribers,
        total_revenue: total_revenue_life * total_subscribers,
        total_monthly_fixed_costs: costs.monthly_fixed_costs,
        total_monthly_depreciation: costs.monthly_depreciation,
        total_capital_investment: costs.capital_investment,
        net_profit_3_months,
        net_profit_6_months,
        net_profit_12_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scenario;

    #[test]
    fn test_zero_cost_context_echoes_zeros() {
        let metrics = compute_metrics(&Scenario::Realistic.inputs(), &CostContext::default());
        assert_eq!(metrics.total_monthly_fixed_costs, 0.0);
        assert_eq!(metrics.total_monthly_depreciation, 0.0);
        assert_eq!(metrics.total_capital_investment, 0.0);
        // With zero overhead the net horizons equal the gross horizons
        assert_eq!(metrics.net_profit_12_months, metrics.expected_profit_12_months);
    }

    #[test]
    fn test_gross_margin_equals_ltv() {
        let metrics = compute_metrics(&Scenario::Pessimistic.inputs(), &CostContext::default());
        assert_eq!(metrics.gross_margin, metrics.ltv);
    }

    #[test]
    fn test_ltv_cac_ratio_guards_zero_cac() {
        let mut inputs = Scenario::Realistic.inputs();
        inputs.first_month_commission = 0.0;
        inputs.upfront_fee_per_partner = 0.0;
        let metrics = compute_metrics(&inputs, &CostContext::default());
        assert_eq!(metrics.cac, 0.0);
        assert!(metrics.ltv_cac_ratio().is_finite());
    }
}
