//! Derived insights over a sweep series

use serde::{Deserialize, Serialize};

use super::evaluator::{SweepPoint, SweepSeries};

/// How close a sample must be to the live value to count as the base point
/// outright; otherwise the nearest sample wins.
const BASE_EPSILON: f64 = 0.1;

/// Best/worst/base reduction of one sweep series.
///
/// `best` and `worst` rank by twelve-month net profit, ties broken by first
/// occurrence in ascending sample order. `base` is the sample standing in
/// for the caller's current live value of the swept variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepInsights {
    pub base: SweepPoint,
    pub best: SweepPoint,
    pub worst: SweepPoint,
    /// Net-profit gain available by moving from base to best
    pub profit_improvement: f64,
    /// Net-profit loss risked by moving from base to worst
    pub profit_decline: f64,
    /// Improvement as a share of the base net profit (%); zero when the
    /// base profit is exactly zero
    pub improvement_percent: f64,
}

impl SweepInsights {
    /// Reduce a series against the caller's live value. Returns `None` for
    /// an empty series.
    #[must_use]
    pub fn from_series(series: &SweepSeries, current_value: f64) -> Option<Self> {
        let points = &series.points;
        let first = *points.first()?;

        let mut base = first;
        let mut base_distance = (first.value - current_value).abs();
        let mut best = first;
        let mut worst = first;

        for point in &points[1..] {
            let distance = (point.value - current_value).abs();
            if distance < base_distance && base_distance > BASE_EPSILON {
                base = *point;
                base_distance = distance;
            }
            if point.net_profit_12_months > best.net_profit_12_months {
                best = *point;
            }
            if point.net_profit_12_months < worst.net_profit_12_months {
                worst = *point;
            }
        }

        let profit_improvement = best.net_profit_12_months - base.net_profit_12_months;
        let profit_decline = base.net_profit_12_months - worst.net_profit_12_months;
        let improvement_percent = if base.net_profit_12_months == 0.0 {
            0.0
        } else {
            profit_improvement / base.net_profit_12_months.abs() * 100.0
        };

        Some(Self {
            base,
            best,
            worst,
            profit_improvement,
            profit_decline,
            improvement_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputField;

    fn point(value: f64, net: f64) -> SweepPoint {
        SweepPoint {
            value,
            ltv: 0.0,
            cac: 0.0,
            net_profit_12_months: net,
            gross_margin_percentage: 0.0,
            payback_period: 0.0,
        }
    }

    fn series(points: Vec<SweepPoint>) -> SweepSeries {
        SweepSeries {
            field: InputField::ChurnRate,
            points,
        }
    }

    #[test]
    fn test_empty_series_has_no_insights() {
        assert!(SweepInsights::from_series(&series(vec![]), 5.0).is_none());
    }

    #[test]
    fn test_best_and_worst_by_net_profit() {
        let s = series(vec![point(1.0, 10.0), point(2.0, 50.0), point(3.0, -20.0)]);
        let insights = SweepInsights::from_series(&s, 1.0).unwrap();
        assert_eq!(insights.best.value, 2.0);
        assert_eq!(insights.worst.value, 3.0);
        assert_eq!(insights.profit_improvement, 40.0);
        assert_eq!(insights.profit_decline, 30.0);
    }

    #[test]
    fn test_ties_break_to_first_occurrence() {
        let s = series(vec![point(1.0, 7.0), point(2.0, 7.0), point(3.0, 7.0)]);
        let insights = SweepInsights::from_series(&s, 2.0).unwrap();
        assert_eq!(insights.best.value, 1.0);
        assert_eq!(insights.worst.value, 1.0);
    }

    #[test]
    fn test_base_snaps_to_exact_sample() {
        let s = series(vec![point(1.0, 1.0), point(6.0, 2.0), point(11.0, 3.0)]);
        let insights = SweepInsights::from_series(&s, 6.0).unwrap();
        assert_eq!(insights.base.value, 6.0);
    }

    #[test]
    fn test_base_falls_back_to_nearest_sample() {
        let s = series(vec![point(1.0, 1.0), point(6.0, 2.0), point(11.0, 3.0)]);
        let insights = SweepInsights::from_series(&s, 7.9).unwrap();
        assert_eq!(insights.base.value, 6.0);
    }

    #[test]
    fn test_zero_base_profit_guards_percentage() {
        let s = series(vec![point(1.0, 0.0), point(2.0, 100.0)]);
        let insights = SweepInsights::from_series(&s, 1.0).unwrap();
        assert_eq!(insights.improvement_percent, 0.0);
        assert_eq!(insights.profit_improvement, 100.0);
    }

    #[test]
    fn test_negative_base_profit_uses_magnitude() {
        let s = series(vec![point(1.0, -50.0), point(2.0, 50.0)]);
        let insights = SweepInsights::from_series(&s, 1.0).unwrap();
        assert_eq!(insights.improvement_percent, 200.0);
    }
}
