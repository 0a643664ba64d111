//! Cost ledgers and their reductions
//!
//! Two collections live outside the input snapshot: recurring monthly cost
//! items and long-lived capital assets. The engine never sees either
//! collection; a [`CostLedger`] reduces them to the three scalars of a
//! [`CostContext`] before each evaluation.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{CostError, ParseError};

/// Classification of a recurring monthly cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    Fixed,
    Variable,
}

/// A named recurring monthly charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: CostKind,
}

impl CostItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: f64, kind: CostKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            kind,
        }
    }
}

/// Category tag for a capital asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapitalCategory {
    Equipment,
    Furniture,
    Technology,
    Infrastructure,
    Other,
}

impl std::str::FromStr for CapitalCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "equipment" => Ok(Self::Equipment),
            "furniture" => Ok(Self::Furniture),
            "technology" => Ok(Self::Technology),
            "infrastructure" => Ok(Self::Infrastructure),
            "other" => Ok(Self::Other),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::str::FromStr for CostKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "variable" => Ok(Self::Variable),
            _ => Err(ParseError::UnknownCostKind(s.to_string())),
        }
    }
}

/// A long-lived asset depreciated straight-line over its useful life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalCostItem {
    pub id: String,
    pub name: String,
    /// Acquisition amount
    pub amount: f64,
    /// Useful life in months; must be > 0
    pub useful_life: u32,
    pub purchase_date: Date,
    /// Residual value at end of useful life
    pub salvage_value: f64,
    pub category: CapitalCategory,
}

impl CapitalCostItem {
    /// Straight-line monthly depreciation: `(amount - salvage) / useful_life`.
    ///
    /// An item with a zero useful life contributes nothing; such items are
    /// rejected at the ledger boundary and only reachable by constructing
    /// the struct directly.
    #[must_use]
    pub fn monthly_depreciation(&self) -> f64 {
        if self.useful_life == 0 {
            return 0.0;
        }
        (self.amount - self.salvage_value) / f64::from(self.useful_life)
    }

    fn validate(&self) -> Result<(), CostError> {
        if self.useful_life == 0 {
            return Err(CostError::ZeroUsefulLife {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// The three scalar cost aggregates the engine consumes.
///
/// Defaults to all zeros, matching an evaluation with no ledger context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostContext {
    /// Sum of fixed-tagged recurring cost amounts
    pub monthly_fixed_costs: f64,
    /// Sum of straight-line monthly depreciation across capital items
    pub monthly_depreciation: f64,
    /// Sum of capital acquisition amounts
    pub capital_investment: f64,
}

/// Owns both cost collections and performs the scalar reductions.
///
/// Mutations validate at this boundary so that every stored capital item has
/// a positive useful life.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLedger {
    pub cost_items: Vec<CostItem>,
    pub capital_items: Vec<CapitalCostItem>,
}

impl CostLedger {
    /// Empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed ledger a fresh session starts from: four fixed monthly cost
    /// items totalling 24,000 and three capital assets.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            cost_items: vec![
                CostItem::new("salaries", "Salaries", 15_000.0, CostKind::Fixed),
                CostItem::new("rent", "Office rent", 4_500.0, CostKind::Fixed),
                CostItem::new("marketing", "Marketing", 3_000.0, CostKind::Fixed),
                CostItem::new("software", "Software subscriptions", 1_500.0, CostKind::Fixed),
            ],
            capital_items: vec![
                CapitalCostItem {
                    id: "servers".to_string(),
                    name: "Server hardware".to_string(),
                    amount: 60_000.0,
                    useful_life: 36,
                    purchase_date: jiff::civil::date(2025, 1, 1),
                    salvage_value: 6_000.0,
                    category: CapitalCategory::Equipment,
                },
                CapitalCostItem {
                    id: "furniture".to_string(),
                    name: "Office furniture".to_string(),
                    amount: 20_000.0,
                    useful_life: 60,
                    purchase_date: jiff::civil::date(2025, 1, 1),
                    salvage_value: 2_000.0,
                    category: CapitalCategory::Furniture,
                },
                CapitalCostItem {
                    id: "laptops".to_string(),
                    name: "Staff laptops".to_string(),
                    amount: 30_000.0,
                    useful_life: 24,
                    purchase_date: jiff::civil::date(2025, 1, 1),
                    salvage_value: 3_000.0,
                    category: CapitalCategory::Technology,
                },
            ],
        }
    }

    /// Replace the collections wholesale, validating every capital item
    pub fn from_items(
        cost_items: Vec<CostItem>,
        capital_items: Vec<CapitalCostItem>,
    ) -> Result<Self, CostError> {
        for item in &capital_items {
            item.validate()?;
        }
        Ok(Self {
            cost_items,
            capital_items,
        })
    }

    pub fn add_cost_item(&mut self, item: CostItem) {
        self.cost_items.push(item);
    }

    pub fn update_cost_item(&mut self, item: CostItem) -> Result<(), CostError> {
        match self.cost_items.iter_mut().find(|c| c.id == item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(CostError::ItemNotFound { id: item.id }),
        }
    }

    pub fn remove_cost_item(&mut self, id: &str) -> Result<(), CostError> {
        let before = self.cost_items.len();
        self.cost_items.retain(|c| c.id != id);
        if self.cost_items.len() == before {
            return Err(CostError::ItemNotFound { id: id.to_string() });
        }
        Ok(())
    }

    pub fn add_capital_item(&mut self, item: CapitalCostItem) -> Result<(), CostError> {
        item.validate()?;
        self.capital_items.push(item);
        Ok(())
    }

    pub fn update_capital_item(&mut self, item: CapitalCostItem) -> Result<(), CostError> {
        item.validate()?;
        match self.capital_items.iter_mut().find(|c| c.id == item.id) {
            Some(existing) => {
                *existing = item;
                Ok(())
            }
            None => Err(CostError::ItemNotFound { id: item.id }),
        }
    }

    pub fn remove_capital_item(&mut self, id: &str) -> Result<(), CostError> {
        let before = self.capital_items.len();
        self.capital_items.retain(|c| c.id != id);
        if self.capital_items.len() == before {
            return Err(CostError::ItemNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Sum of fixed-tagged recurring costs. Variable-tagged items are
    /// tracked in the ledger but excluded from this aggregate.
    #[must_use]
    pub fn monthly_fixed_total(&self) -> f64 {
        self.cost_items
            .iter()
            .filter(|c| c.kind == CostKind::Fixed)
            .map(|c| c.amount)
            .sum()
    }

    /// Sum of straight-line monthly depreciation across all capital items
    #[must_use]
    pub fn monthly_depreciation(&self) -> f64 {
        self.capital_items
            .iter()
            .map(CapitalCostItem::monthly_depreciation)
            .sum()
    }

    /// Sum of capital acquisition amounts
    #[must_use]
    pub fn capital_investment(&self) -> f64 {
        self.capital_items.iter().map(|c| c.amount).sum()
    }

    /// Reduce both collections to the scalars the engine consumes
    #[must_use]
    pub fn cost_context(&self) -> CostContext {
        CostContext {
            monthly_fixed_costs: self.monthly_fixed_total(),
            monthly_depreciation: self.monthly_depreciation(),
            capital_investment: self.capital_investment(),
        }
    }
}
