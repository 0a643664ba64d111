//! Simulation input snapshot and fieldwise access
//!
//! `SimulationInputs` is the flat record the metrics engine consumes; one
//! immutable value per evaluation. `InputField` names each field so callers
//! can update or sweep a single variable without dynamic key lookup.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, ParseError};

/// A complete snapshot of the business-model inputs.
///
/// All rate fields are percentages (fractions of 100). Monetary fields are
/// plain floating-point amounts in the stored currency. Counts and month
/// durations are whole numbers in practice but kept as `f64` so a sweep can
/// substitute arbitrary sample values uniformly.
///
/// Nothing here is enforced at the type level; boundaries that accept raw
/// user entry call [`SimulationInputs::validate`] before handing a snapshot
/// to the engine. The engine itself tolerates any finite values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    // Commission terms
    /// Commission on the first subscription month (%)
    pub first_month_commission: f64,
    /// Commission on every month after the first (%)
    pub recurring_commission: f64,
    /// Fixed fee paid once per partner
    pub upfront_fee_per_partner: f64,

    // Pricing
    /// Average monthly subscription price before discounts
    pub avg_subscription_price: f64,
    /// Discount offered to the partner's audience (%)
    pub influencer_discount: f64,

    // Customer behavior
    /// Share of referred visitors who subscribe (%)
    pub conversion_rate: f64,
    /// Monthly cancellation rate (%)
    pub churn_rate: f64,
    /// Average months a subscriber stays
    pub avg_retention_months: f64,
    /// Share of revenue lost to refunds (%)
    pub refund_rate: f64,

    // Operational unit costs
    /// Infrastructure cost per user per month
    pub infra_cost_per_user: f64,
    /// Payment-gateway fee on each charge (%)
    pub payment_gateway_fee: f64,
    /// Support cost per user per month
    pub support_cost_per_user: f64,

    // Growth
    /// Number of active partners
    pub partner_count: f64,
    /// Average subscribers referred by each partner
    pub avg_referrals_per_partner: f64,
}

impl SimulationInputs {
    /// Check the caller-side invariants: percentages within [0, 100] and
    /// all other fields non-negative and finite.
    pub fn validate(&self) -> Result<(), InputError> {
        for field in InputField::ALL {
            let value = field.get(self);
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
            if field.is_rate() {
                if !(0.0..=100.0).contains(&value) {
                    return Err(InputError::RateOutOfRange { field, value });
                }
            } else if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Copy of this snapshot with a single field replaced
    #[must_use]
    pub fn with_field(&self, field: InputField, value: f64) -> Self {
        let mut next = *self;
        field.set(&mut next, value);
        next
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        crate::model::Scenario::Realistic.inputs()
    }
}

/// Names one field of [`SimulationInputs`].
///
/// Sweeps and single-field updates select their target through this enum
/// rather than by string key, so an unknown field is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    FirstMonthCommission,
    RecurringCommission,
    UpfrontFeePerPartner,
    AvgSubscriptionPrice,
    InfluencerDiscount,
    ConversionRate,
    ChurnRate,
    AvgRetentionMonths,
    RefundRate,
    InfraCostPerUser,
    PaymentGatewayFee,
    SupportCostPerUser,
    PartnerCount,
    AvgReferralsPerPartner,
}

impl InputField {
    /// Every field, in declaration order
    pub const ALL: [InputField; 14] = [
        InputField::FirstMonthCommission,
        InputField::RecurringCommission,
        InputField::UpfrontFeePerPartner,
        InputField::AvgSubscriptionPrice,
        InputField::InfluencerDiscount,
        InputField::ConversionRate,
        InputField::ChurnRate,
        InputField::AvgRetentionMonths,
        InputField::RefundRate,
        InputField::InfraCostPerUser,
        InputField::PaymentGatewayFee,
        InputField::SupportCostPerUser,
        InputField::PartnerCount,
        InputField::AvgReferralsPerPartner,
    ];

    /// Read this field from a snapshot
    #[must_use]
    pub fn get(self, inputs: &SimulationInputs) -> f64 {
        match self {
            Self::FirstMonthCommission => inputs.first_month_commission,
            Self::RecurringCommission => inputs.recurring_commission,
            Self::UpfrontFeePerPartner => inputs.upfront_fee_per_partner,
            Self::AvgSubscriptionPrice => inputs.avg_subscription_price,
            Self::InfluencerDiscount => inputs.influencer_discount,
            Self::ConversionRate => inputs.conversion_rate,
            Self::ChurnRate => inputs.churn_rate,
            Self::AvgRetentionMonths => inputs.avg_retention_months,
            Self::RefundRate => inputs.refund_rate,
            Self::InfraCostPerUser => inputs.infra_cost_per_user,
            Self::PaymentGatewayFee => inputs.payment_gateway_fee,
            Self::SupportCostPerUser => inputs.support_cost_per_user,
            Self::PartnerCount => inputs.partner_count,
            Self::AvgReferralsPerPartner => inputs.avg_referrals_per_partner,
        }
    }

    /// Write this field on a snapshot
    pub fn set(self, inputs: &mut SimulationInputs, value: f64) {
        match self {
            Self::FirstMonthCommission => inputs.first_month_commission = value,
            Self::RecurringCommission => inputs.recurring_commission = value,
            Self::UpfrontFeePerPartner => inputs.upfront_fee_per_partner = value,
            Self::AvgSubscriptionPrice => inputs.avg_subscription_price = value,
            Self::InfluencerDiscount => inputs.influencer_discount = value,
            Self::ConversionRate => inputs.conversion_rate = value,
            Self::ChurnRate => inputs.churn_rate = value,
            Self::AvgRetentionMonths => inputs.avg_retention_months = value,
            Self::RefundRate => inputs.refund_rate = value,
            Self::InfraCostPerUser => inputs.infra_cost_per_user = value,
            Self::PaymentGatewayFee => inputs.payment_gateway_fee = value,
            Self::SupportCostPerUser => inputs.support_cost_per_user = value,
            Self::PartnerCount => inputs.partner_count = value,
            Self::AvgReferralsPerPartner => inputs.avg_referrals_per_partner = value,
        }
    }

    /// Whether this field is a percentage (validated to [0, 100])
    #[must_use]
    pub fn is_rate(self) -> bool {
        matches!(
            self,
            Self::FirstMonthCommission
                | Self::RecurringCommission
                | Self::InfluencerDiscount
                | Self::ConversionRate
                | Self::ChurnRate
                | Self::RefundRate
                | Self::PaymentGatewayFee
        )
    }

    /// Human-readable label for display
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstMonthCommission => "First-month commission",
            Self::RecurringCommission => "Recurring commission",
            Self::UpfrontFeePerPartner => "Upfront fee per partner",
            Self::AvgSubscriptionPrice => "Avg subscription price",
            Self::InfluencerDiscount => "Influencer discount",
            Self::ConversionRate => "Conversion rate",
            Self::ChurnRate => "Churn rate",
            Self::AvgRetentionMonths => "Avg retention months",
            Self::RefundRate => "Refund rate",
            Self::InfraCostPerUser => "Infra cost per user",
            Self::PaymentGatewayFee => "Payment gateway fee",
            Self::SupportCostPerUser => "Support cost per user",
            Self::PartnerCount => "Partner count",
            Self::AvgReferralsPerPartner => "Avg referrals per partner",
        }
    }

    /// Stable snake_case name, also accepted by [`InputField::from_str`]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstMonthCommission => "first_month_commission",
            Self::RecurringCommission => "recurring_commission",
            Self::UpfrontFeePerPartner => "upfront_fee_per_partner",
            Self::AvgSubscriptionPrice => "avg_subscription_price",
            Self::InfluencerDiscount => "influencer_discount",
            Self::ConversionRate => "conversion_rate",
            Self::ChurnRate => "churn_rate",
            Self::AvgRetentionMonths => "avg_retention_months",
            Self::RefundRate => "refund_rate",
            Self::InfraCostPerUser => "infra_cost_per_user",
            Self::PaymentGatewayFee => "payment_gateway_fee",
            Self::SupportCostPerUser => "support_cost_per_user",
            Self::PartnerCount => "partner_count",
            Self::AvgReferralsPerPartner => "avg_referrals_per_partner",
        }
    }
}

impl std::str::FromStr for InputField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        InputField::ALL
            .into_iter()
            .find(|field| field.name() == normalized)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scenario;

    #[test]
    fn test_get_set_round_trip_all_fields() {
        let mut inputs = Scenario::Realistic.inputs();
        for (i, field) in InputField::ALL.into_iter().enumerate() {
            let value = 1000.0 + i as f64;
            field.set(&mut inputs, value);
            assert_eq!(field.get(&inputs), value, "field {field}");
        }
    }

    #[test]
    fn test_with_field_touches_only_target() {
        let base = Scenario::Realistic.inputs();
        let updated = base.with_field(InputField::ChurnRate, 42.0);
        assert_eq!(updated.churn_rate, 42.0);
        for field in InputField::ALL {
            if field != InputField::ChurnRate {
                assert_eq!(field.get(&updated), field.get(&base), "field {field}");
            }
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        let inputs = Scenario::Realistic.inputs().with_field(InputField::ChurnRate, 120.0);
        assert_eq!(
            inputs.validate(),
            Err(InputError::RateOutOfRange {
                field: InputField::ChurnRate,
                value: 120.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_count() {
        let inputs = Scenario::Realistic.inputs().with_field(InputField::PartnerCount, -1.0);
        assert!(matches!(
            inputs.validate(),
            Err(InputError::Negative {
                field: InputField::PartnerCount,
                ..
            })
        ));
    }

    #[test]
    fn test_field_parses_from_name() {
        for field in InputField::ALL {
            assert_eq!(field.name().parse::<InputField>().unwrap(), field);
        }
        assert_eq!("churn-rate".parse::<InputField>().unwrap(), InputField::ChurnRate);
        assert!("not_a_field".parse::<InputField>().is_err());
    }

    #[test]
    fn test_inputs_serialize_camel_case() {
        let json = serde_json::to_value(Scenario::Realistic.inputs()).unwrap();
        assert!(json.get("firstMonthCommission").is_some());
        assert!(json.get("avgReferralsPerPartner").is_some());
        assert!(json.get("first_month_commission").is_none());
    }
}
