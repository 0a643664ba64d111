//! Sweep stepping, series contents, and insight derivation

use crate::analysis::{SweepConfig, SweepRange, sweep};
use crate::engine::compute_metrics;
use crate::model::{CostContext, CostLedger, InputField, Scenario};

#[test]
fn test_churn_sweep_produces_ten_samples() {
    // 1..=50 step 5: the last in-range sample is 46, since 51 > 50
    let config = SweepConfig::for_field(InputField::ChurnRate);
    let series = sweep(&Scenario::Realistic.inputs(), &config, &CostContext::default());

    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    assert_eq!(
        values,
        vec![1.0, 6.0, 11.0, 16.0, 21.0, 26.0, 31.0, 36.0, 41.0, 46.0]
    );
}

#[test]
fn test_samples_ascend() {
    let config = SweepConfig::for_field(InputField::PartnerCount);
    let series = sweep(&Scenario::Realistic.inputs(), &config, &CostContext::default());
    assert!(series.points.windows(2).all(|w| w[0].value < w[1].value));
}

#[test]
fn test_each_point_matches_direct_engine_call() {
    let base = Scenario::Realistic.inputs();
    let ledger = CostLedger::with_defaults();
    let context = ledger.cost_context();
    let config = SweepConfig::for_field(InputField::AvgRetentionMonths);

    let series = sweep(&base, &config, &context);
    assert!(!series.is_empty());

    for point in &series.points {
        let expected = compute_metrics(&base.with_field(config.field, point.value), &context);
        assert_eq!(point.ltv, expected.ltv);
        assert_eq!(point.cac, expected.cac);
        assert_eq!(point.net_profit_12_months, expected.net_profit_12_months);
        assert_eq!(point.gross_margin_percentage, expected.gross_margin_percentage);
        assert_eq!(point.payback_period, expected.payback_period);
    }
}

#[test]
fn test_sweep_leaves_other_fields_fixed() {
    // Sweeping churn must not disturb any metric that churn does not feed
    let base = Scenario::Realistic.inputs();
    let config = SweepConfig::for_field(InputField::ChurnRate);
    let series = sweep(&base, &config, &CostContext::default());

    let baseline = compute_metrics(&base, &CostContext::default());
    for point in &series.points {
        assert_eq!(point.ltv, baseline.ltv);
        assert_eq!(point.net_profit_12_months, baseline.net_profit_12_months);
    }
}

#[test]
fn test_switching_field_resets_range_to_default() {
    let churn = SweepConfig::for_field(InputField::ChurnRate);
    assert_eq!(churn.range, SweepRange::new(1.0, 50.0, 5.0));

    let partners = SweepConfig::for_field(InputField::PartnerCount);
    assert_eq!(partners.range, SweepRange::new(5.0, 500.0, 10.0));

    let refunds = SweepConfig::for_field(InputField::RefundRate);
    assert_eq!(refunds.range, SweepRange::FALLBACK);
}

#[test]
fn test_recurring_commission_sweep_insights() {
    // A higher recurring commission cuts the steady-state monthly profit,
    // so best sits at the bottom of the range and worst at the top
    let base = Scenario::Realistic.inputs();
    let ledger = CostLedger::with_defaults();
    let config = SweepConfig::for_field(InputField::RecurringCommission);

    let series = sweep(&base, &config, &ledger.cost_context());
    let insights = series.insights(base.recurring_commission).unwrap();

    assert_eq!(insights.base.value, 15.0);
    assert_eq!(insights.best.value, 0.0);
    assert_eq!(insights.worst.value, 50.0);
    assert!(insights.profit_improvement > 0.0);
    assert!(insights.profit_decline > 0.0);
    assert!(insights.improvement_percent > 0.0);
}

#[test]
fn test_retention_moves_ltv_but_not_profit_horizons() {
    // The profit horizons are built from steady-state monthly figures;
    // retention only stretches the lifetime aggregates behind LTV
    let base = Scenario::Realistic.inputs();
    let config = SweepConfig::for_field(InputField::AvgRetentionMonths);
    let series = sweep(&base, &config, &CostContext::default());

    let baseline = compute_metrics(&base, &CostContext::default());
    let ltvs: Vec<f64> = series.points.iter().map(|p| p.ltv).collect();
    assert!(ltvs.windows(2).all(|w| w[0] < w[1]));
    for point in &series.points {
        assert_eq!(point.net_profit_12_months, baseline.net_profit_12_months);
    }
}

#[test]
fn test_flat_series_ties_resolve_to_first_sample() {
    // Conversion rate feeds nothing downstream, so every sample carries the
    // same profit and both extremes resolve to the first sample
    let base = Scenario::Realistic.inputs();
    let config = SweepConfig::for_field(InputField::ConversionRate);
    let series = sweep(&base, &config, &CostContext::default());

    let insights = series.insights(base.conversion_rate).unwrap();
    assert_eq!(insights.best.value, series.points[0].value);
    assert_eq!(insights.worst.value, series.points[0].value);
    assert_eq!(insights.profit_improvement, 0.0);
    assert_eq!(insights.profit_decline, 0.0);
}

#[test]
fn test_explicit_range_overrides_default() {
    let config = SweepConfig::with_range(InputField::ChurnRate, SweepRange::new(10.0, 12.0, 1.0));
    let series = sweep(&Scenario::Realistic.inputs(), &config, &CostContext::default());
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![10.0, 11.0, 12.0]);
}

#[test]
fn test_sweep_sample_counts_are_bounded() {
    for field in InputField::ALL {
        let config = SweepConfig::for_field(field);
        let count = config.range.sample_count();
        assert!(count >= 1, "{field}");
        assert!(count <= 101, "{field}: {count} samples");
    }
}
