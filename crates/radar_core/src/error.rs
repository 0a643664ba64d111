use std::fmt;

use crate::model::InputField;

/// Errors from caller-side validation of a simulation input snapshot.
///
/// The engine itself never rejects values; boundaries that accept raw user
/// entry run this validation before handing a snapshot to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A percentage field is outside [0, 100]
    RateOutOfRange { field: InputField, value: f64 },
    /// A count, price, or duration field is negative
    Negative { field: InputField, value: f64 },
    /// A field value is NaN or infinite
    NotFinite { field: InputField },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::RateOutOfRange { field, value } => {
                write!(f, "{} must be between 0 and 100 (got {value})", field.label())
            }
            InputError::Negative { field, value } => {
                write!(f, "{} must not be negative (got {value})", field.label())
            }
            InputError::NotFinite { field } => {
                write!(f, "{} must be a finite number", field.label())
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Errors from cost-ledger mutations
#[derive(Debug, Clone, PartialEq)]
pub enum CostError {
    /// A capital item's useful life is zero months; straight-line
    /// depreciation is undefined for it
    ZeroUsefulLife { id: String },
    /// No ledger item exists with the given id
    ItemNotFound { id: String },
}

impl fmt::Display for CostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostError::ZeroUsefulLife { id } => {
                write!(f, "capital item {id:?} has a useful life of zero months")
            }
            CostError::ItemNotFound { id } => write!(f, "no ledger item with id {id:?}"),
        }
    }
}

impl std::error::Error for CostError {}

/// Errors from parsing user-facing names into model enums
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnknownField(String),
    UnknownScenario(String),
    UnknownCurrency(String),
    UnknownCostKind(String),
    UnknownCategory(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownField(name) => write!(f, "unknown input field {name:?}"),
            ParseError::UnknownScenario(name) => write!(f, "unknown scenario {name:?}"),
            ParseError::UnknownCurrency(name) => write!(f, "unknown currency {name:?}"),
            ParseError::UnknownCostKind(name) => write!(f, "unknown cost type {name:?}"),
            ParseError::UnknownCategory(name) => write!(f, "unknown capital category {name:?}"),
        }
    }
}

impl std::error::Error for ParseError {}
