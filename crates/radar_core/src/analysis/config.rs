//! Sweep configuration and per-field default ranges

use serde::{Deserialize, Serialize};

use crate::model::InputField;

/// A numeric sample range: `min, min + step, min + 2*step, …` up to and
/// including `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SweepRange {
    /// Generic range for fields without a registered default
    pub const FALLBACK: SweepRange = SweepRange {
        min: 0.0,
        max: 100.0,
        step: 5.0,
    };

    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// The recommended range for a field.
    ///
    /// Commission, pricing, and growth fields carry ranges matching their
    /// input controls; everything else falls back to [`SweepRange::FALLBACK`].
    #[must_use]
    pub fn default_for(field: InputField) -> Self {
        match field {
            InputField::FirstMonthCommission => Self::new(0.0, 100.0, 5.0),
            InputField::RecurringCommission => Self::new(0.0, 50.0, 5.0),
            InputField::UpfrontFeePerPartner => Self::new(0.0, 10_000.0, 100.0),
            InputField::AvgSubscriptionPrice => Self::new(50.0, 1_000.0, 10.0),
            InputField::InfluencerDiscount => Self::new(0.0, 50.0, 5.0),
            InputField::ChurnRate => Self::new(1.0, 50.0, 5.0),
            InputField::AvgRetentionMonths => Self::new(1.0, 24.0, 1.0),
            InputField::PartnerCount => Self::new(5.0, 500.0, 10.0),
            InputField::AvgReferralsPerPartner => Self::new(1.0, 100.0, 5.0),
            InputField::ConversionRate
            | InputField::RefundRate
            | InputField::InfraCostPerUser
            | InputField::PaymentGatewayFee
            | InputField::SupportCostPerUser => Self::FALLBACK,
        }
    }

    /// Materialize the sample values in ascending order.
    ///
    /// The upper bound is inclusive; when `max - min` is not a multiple of
    /// `step` the last sample is the largest value at or below `max`.
    /// Samples are computed as `min + i * step` rather than by repeated
    /// addition so integer-valued grids land exactly on their grid points.
    /// A non-positive or non-finite step degenerates to the single sample
    /// `min`.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if !self.step.is_finite() || self.step <= 0.0 || !self.min.is_finite() || !self.max.is_finite()
        {
            return vec![self.min];
        }
        let mut values = Vec::new();
        let mut i = 0u32;
        loop {
            let value = self.min + f64::from(i) * self.step;
            if value > self.max {
                break;
            }
            values.push(value);
            i += 1;
        }
        if values.is_empty() {
            values.push(self.min);
        }
        values
    }

    /// Number of samples [`SweepRange::values`] will produce
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.values().len()
    }
}

/// One sweep: which field varies and over what range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub field: InputField,
    pub range: SweepRange,
}

impl SweepConfig {
    /// Sweep a field over its recommended default range.
    ///
    /// This is what a caller uses when the selected variable changes: the
    /// range resets to the field's default rather than carrying over.
    #[must_use]
    pub fn for_field(field: InputField) -> Self {
        Self {
            field,
            range: SweepRange::default_for(field),
        }
    }

    /// Sweep a field over an explicit range
    #[must_use]
    pub fn with_range(field: InputField, range: SweepRange) -> Self {
        Self { field, range }
    }
}
