//! Session state: the working snapshot the engine is evaluated against
//!
//! The session owns everything the calculation kernel deliberately does
//! not: the active scenario, the working input snapshot, both cost
//! ledgers, and the currency selection. Every mutation re-derives nothing;
//! callers ask for `metrics()` or `sweep()` when they want fresh numbers.

use radar_core::analysis::{SweepConfig, SweepInsights, SweepRange, SweepSeries, sweep};
use radar_core::engine::compute_metrics;
use radar_core::error::{CostError, InputError};
use radar_core::model::{
    CapitalCostItem, CostContext, CostItem, CostLedger, CurrencySettings, InputField, Scenario,
    SimulationInputs, SimulationMetrics,
};

use crate::data::{DataDirectory, ExportDocument, StorageError, StoragePort};

pub struct Session<S: StoragePort> {
    pub scenario: Scenario,
    pub inputs: SimulationInputs,
    pub ledger: CostLedger,
    pub currency: CurrencySettings,
    store: DataDirectory<S>,
}

impl<S: StoragePort> Session<S> {
    /// Load the stored session, falling back to the realistic preset with
    /// the default ledgers when nothing (or nothing readable) is stored.
    pub fn load_or_default(storage: S) -> Self {
        let store = DataDirectory::new(storage);

        match store.load_state() {
            Ok(Some(document)) => match document.ledger() {
                Ok(ledger) => {
                    return Self {
                        scenario: document.scenario,
                        inputs: document.inputs,
                        ledger,
                        currency: document.currency,
                        store,
                    };
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored ledger is invalid, starting fresh");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load stored session, starting fresh");
            }
        }

        Self {
            scenario: Scenario::Realistic,
            inputs: Scenario::Realistic.inputs(),
            ledger: CostLedger::with_defaults(),
            currency: CurrencySettings::default(),
            store,
        }
    }

    /// Switch scenario, replacing the working snapshot wholesale
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.inputs = scenario.inputs();
        tracing::info!(scenario = %scenario, "Scenario selected");
    }

    /// Update one input field, validating the resulting snapshot before
    /// committing it
    pub fn update_input(&mut self, field: InputField, value: f64) -> Result<(), InputError> {
        let candidate = self.inputs.with_field(field, value);
        candidate.validate()?;
        self.inputs = candidate;
        tracing::debug!(field = %field, value, "Input updated");
        Ok(())
    }

    /// Reduce the ledgers to the scalars the engine consumes
    #[must_use]
    pub fn cost_context(&self) -> CostContext {
        self.ledger.cost_context()
    }

    /// Evaluate the engine against the current state
    #[must_use]
    pub fn metrics(&self) -> SimulationMetrics {
        compute_metrics(&self.inputs, &self.cost_context())
    }

    /// Sweep one field. Without an explicit range the field's default range
    /// applies, which is also what a caller gets after switching fields.
    /// Returns the series plus insights anchored at the field's live value.
    #[must_use]
    pub fn sweep_field(
        &self,
        field: InputField,
        range: Option<SweepRange>,
    ) -> (SweepSeries, Option<SweepInsights>) {
        let config = match range {
            Some(range) => SweepConfig::with_range(field, range),
            None => SweepConfig::for_field(field),
        };
        let series = sweep(&self.inputs, &config, &self.cost_context());
        let insights = series.insights(field.get(&self.inputs));
        (series, insights)
    }

    pub fn add_cost_item(&mut self, item: CostItem) {
        self.ledger.add_cost_item(item);
    }

    pub fn remove_cost_item(&mut self, id: &str) -> Result<(), CostError> {
        self.ledger.remove_cost_item(id)
    }

    pub fn add_capital_item(&mut self, item: CapitalCostItem) -> Result<(), CostError> {
        self.ledger.add_capital_item(item)
    }

    pub fn remove_capital_item(&mut self, id: &str) -> Result<(), CostError> {
        self.ledger.remove_capital_item(id)
    }

    pub fn set_currency(&mut self, currency: CurrencySettings) {
        self.currency = currency;
    }

    /// Snapshot the session into an export document
    #[must_use]
    pub fn to_document(&self) -> ExportDocument {
        ExportDocument::new(self.scenario, self.inputs, &self.ledger, self.currency)
    }

    /// Replace the session state with an imported document
    pub fn apply_document(&mut self, document: ExportDocument) -> Result<(), StorageError> {
        let ledger = document.ledger()?;
        self.scenario = document.scenario;
        self.inputs = document.inputs;
        self.ledger = ledger;
        self.currency = document.currency;
        Ok(())
    }

    /// Persist the current state through the storage port
    pub fn save(&self) -> Result<(), StorageError> {
        self.store.save_state(&self.to_document())
    }

    /// Drop the persisted state; the next load starts from defaults
    pub fn clear_saved(&self) -> Result<(), StorageError> {
        self.store.clear_state()
    }
}
