//! The durable JSON state document
//!
//! One document carries the full session state: scenario, working inputs,
//! both cost ledgers, and the currency selection. The shape is the one
//! external contract this tool has; imports from older exports must keep
//! working, so unknown-but-optional sections are tolerated and defaulted
//! while a document without `version` or `inputs` is rejected outright.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use radar_core::model::{
    CapitalCostItem, CostItem, CostLedger, CurrencySettings, Scenario, SimulationInputs,
};

/// Version written into every export
pub const EXPORT_VERSION: &str = "1.0";

/// Errors from parsing an imported document
#[derive(Debug)]
pub enum ImportError {
    /// The document is not valid JSON or a field has the wrong shape
    Parse(serde_json::Error),
    /// The document has no `version` field
    MissingVersion,
    /// The document has no `inputs` field
    MissingInputs,
    /// A capital item in the document fails ledger validation
    InvalidLedger(radar_core::error::CostError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(e) => write!(f, "not a valid state document: {e}"),
            ImportError::MissingVersion => write!(f, "state document has no version field"),
            ImportError::MissingInputs => write!(f, "state document has no inputs field"),
            ImportError::InvalidLedger(e) => write!(f, "state document has an invalid ledger: {e}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Parse(e) => Some(e),
            ImportError::InvalidLedger(e) => Some(e),
            _ => None,
        }
    }
}

/// The full state document, camelCase on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: Timestamp,
    pub scenario: Scenario,
    pub inputs: SimulationInputs,
    pub cost_items: Vec<CostItem>,
    pub capital_costs: Vec<CapitalCostItem>,
    pub currency: CurrencySettings,
}

/// Loose mirror of the document used to distinguish "missing" from
/// "invalid" during import
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    version: Option<String>,
    export_date: Option<Timestamp>,
    scenario: Option<Scenario>,
    inputs: Option<SimulationInputs>,
    cost_items: Option<Vec<CostItem>>,
    capital_costs: Option<Vec<CapitalCostItem>>,
    currency: Option<CurrencySettings>,
}

impl ExportDocument {
    /// Snapshot the current session state into a document stamped now
    #[must_use]
    pub fn new(
        scenario: Scenario,
        inputs: SimulationInputs,
        ledger: &CostLedger,
        currency: CurrencySettings,
    ) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            export_date: Timestamp::now(),
            scenario,
            inputs,
            cost_items: ledger.cost_items.clone(),
            capital_costs: ledger.capital_items.clone(),
            currency,
        }
    }

    /// Parse and validate an imported document.
    ///
    /// Fails fast when `version` or `inputs` is absent. Missing cost items,
    /// capital costs, or currency are filled with the session defaults; a
    /// missing export date is stamped with the import time.
    pub fn from_json(text: &str) -> Result<Self, ImportError> {
        let raw: RawDocument = serde_json::from_str(text).map_err(ImportError::Parse)?;

        let version = raw.version.ok_or(ImportError::MissingVersion)?;
        let inputs = raw.inputs.ok_or(ImportError::MissingInputs)?;

        let defaults = CostLedger::with_defaults();
        Ok(Self {
            version,
            export_date: raw.export_date.unwrap_or_else(Timestamp::now),
            scenario: raw.scenario.unwrap_or(Scenario::Realistic),
            inputs,
            cost_items: raw.cost_items.unwrap_or(defaults.cost_items),
            capital_costs: raw.capital_costs.unwrap_or(defaults.capital_items),
            currency: raw.currency.unwrap_or_default(),
        })
    }

    /// Serialize for export
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rebuild the cost ledger this document carries, validating every
    /// capital item at the boundary
    pub fn ledger(&self) -> Result<CostLedger, ImportError> {
        CostLedger::from_items(self.cost_items.clone(), self.capital_costs.clone())
            .map_err(ImportError::InvalidLedger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> ExportDocument {
        ExportDocument::new(
            Scenario::Realistic,
            Scenario::Realistic.inputs(),
            &CostLedger::with_defaults(),
            CurrencySettings::default(),
        )
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let doc = sample_document();
        let json = doc.to_json().unwrap();
        let parsed = ExportDocument::from_json(&json).unwrap();

        assert_eq!(parsed.inputs, doc.inputs);
        assert_eq!(parsed.cost_items, doc.cost_items);
        assert_eq!(parsed.capital_costs, doc.capital_costs);
        assert_eq!(parsed.currency, doc.currency);
        assert_eq!(parsed.scenario, doc.scenario);
        assert_eq!(parsed.version, EXPORT_VERSION);
    }

    #[test]
    fn test_missing_version_rejected() {
        let json = r#"{"inputs": {}, "exportDate": "2025-01-01T00:00:00Z"}"#;
        // inputs shaped wrong is a parse error; drop it entirely instead
        let json_no_version = r#"{"exportDate": "2025-01-01T00:00:00Z"}"#;
        assert!(matches!(
            ExportDocument::from_json(json_no_version),
            Err(ImportError::MissingVersion)
        ));
        assert!(ExportDocument::from_json(json).is_err());
    }

    #[test]
    fn test_missing_inputs_rejected() {
        let json = r#"{"version": "1.0"}"#;
        assert!(matches!(
            ExportDocument::from_json(json),
            Err(ImportError::MissingInputs)
        ));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let inputs_json = serde_json::to_string(&Scenario::Pessimistic.inputs()).unwrap();
        let json = format!(r#"{{"version": "1.0", "inputs": {inputs_json}}}"#);

        let doc = ExportDocument::from_json(&json).unwrap();
        assert_eq!(doc.inputs, Scenario::Pessimistic.inputs());
        assert_eq!(doc.scenario, Scenario::Realistic);
        assert_eq!(doc.cost_items, CostLedger::with_defaults().cost_items);
        assert_eq!(doc.currency, CurrencySettings::default());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            ExportDocument::from_json("not json at all"),
            Err(ImportError::Parse(_))
        ));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert!(json.get("exportDate").is_some());
        assert!(json.get("costItems").is_some());
        assert!(json.get("capitalCosts").is_some());
        assert_eq!(json["version"], "1.0");
    }

    #[test]
    fn test_ledger_rebuild_validates_capital_items() {
        let mut doc = sample_document();
        doc.capital_costs[0].useful_life = 0;
        assert!(matches!(doc.ledger(), Err(ImportError::InvalidLedger(_))));
    }
}
