//! Display currency selection
//!
//! All amounts are stored and computed in SAR. The settings here only affect
//! how the presentation layer converts and labels values.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Sar,
    Usd,
}

impl Currency {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Sar => "SAR",
            Currency::Usd => "$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySettings {
    pub currency: Currency,
    /// 1 USD = this many SAR
    pub exchange_rate: f64,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            currency: Currency::Sar,
            exchange_rate: 3.75,
        }
    }
}

impl CurrencySettings {
    /// Convert a stored SAR amount into the selected display currency
    #[must_use]
    pub fn convert(&self, amount: f64) -> f64 {
        match self.currency {
            Currency::Sar => amount,
            Currency::Usd => {
                if self.exchange_rate > 0.0 {
                    amount / self.exchange_rate
                } else {
                    amount
                }
            }
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAR" => Ok(Currency::Sar),
            "USD" => Ok(Currency::Usd),
            _ => Err(ParseError::UnknownCurrency(s.to_string())),
        }
    }
}
