//! Preset snapshots and full-ledger evaluations

use crate::engine::compute_metrics;
use crate::model::{CostLedger, Scenario};

#[test]
fn test_all_presets_pass_validation() {
    for scenario in Scenario::ALL {
        assert!(scenario.inputs().validate().is_ok(), "{scenario}");
    }
}

#[test]
fn test_presets_are_distinct() {
    let optimistic = Scenario::Optimistic.inputs();
    let realistic = Scenario::Realistic.inputs();
    let pessimistic = Scenario::Pessimistic.inputs();
    assert_ne!(optimistic, realistic);
    assert_ne!(realistic, pessimistic);
    assert_ne!(optimistic, pessimistic);
}

#[test]
fn test_realistic_preset_values() {
    let inputs = Scenario::Realistic.inputs();
    assert_eq!(inputs.first_month_commission, 30.0);
    assert_eq!(inputs.recurring_commission, 15.0);
    assert_eq!(inputs.upfront_fee_per_partner, 500.0);
    assert_eq!(inputs.avg_subscription_price, 150.0);
    assert_eq!(inputs.influencer_discount, 10.0);
    assert_eq!(inputs.churn_rate, 10.0);
    assert_eq!(inputs.avg_retention_months, 6.0);
    assert_eq!(inputs.refund_rate, 3.0);
    assert_eq!(inputs.partner_count, 50.0);
    assert_eq!(inputs.avg_referrals_per_partner, 10.0);
}

#[test]
fn test_default_inputs_match_realistic() {
    assert_eq!(crate::model::SimulationInputs::default(), Scenario::Realistic.inputs());
}

#[test]
fn test_scenario_ordering_by_profitability() {
    // The presets are built to rank: optimistic above realistic above
    // pessimistic on twelve-month net profit
    let ledger = CostLedger::with_defaults();
    let context = ledger.cost_context();

    let optimistic = compute_metrics(&Scenario::Optimistic.inputs(), &context);
    let realistic = compute_metrics(&Scenario::Realistic.inputs(), &context);
    let pessimistic = compute_metrics(&Scenario::Pessimistic.inputs(), &context);

    assert!(optimistic.net_profit_12_months > realistic.net_profit_12_months);
    assert!(realistic.net_profit_12_months > pessimistic.net_profit_12_months);
}

#[test]
fn test_realistic_with_default_ledger() {
    let ledger = CostLedger::with_defaults();
    let metrics = compute_metrics(&Scenario::Realistic.inputs(), &ledger.cost_context());

    // Overhead of 24,000 fixed + 2,925 depreciation per month
    assert!((metrics.net_profit_3_months - 3_537.5).abs() < 1e-6);
    assert!((metrics.net_profit_6_months - 52_325.0).abs() < 1e-6);
    assert!((metrics.net_profit_12_months - 149_900.0).abs() < 1e-6);
}

#[test]
fn test_pessimistic_preset_loses_money_per_customer() {
    let metrics = compute_metrics(&Scenario::Pessimistic.inputs(), &CostLedger::with_defaults().cost_context());
    assert!(metrics.ltv < 0.0);
    assert!(metrics.ltv_cac_ratio() < 1.0);
}
