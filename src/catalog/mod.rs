mod builtin;
mod errors;
mod loader;

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::Scenario;

pub use errors::ScenarioError;

/// The ordered, validated list of scenarios a learner works through.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>
}

impl Catalog {
    /// Builds a catalog, rejecting any scenario that breaks the trial-balance preconditions.
    ///
    /// # Errors
    /// Returns `ScenarioError` if:
    /// - The list is empty.
    /// - A row has a negative amount, or carries a balance on both sides or on neither.
    /// - An account code appears twice in the same scenario.
    /// - A scenario has no VAT row to centralize.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, ScenarioError> {
        if scenarios.is_empty() {
            return Err(ScenarioError::EmptyCatalog)
        }

        for scenario in &scenarios {
            validate_scenario(scenario)?;
        }

        Ok(Self { scenarios })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

fn validate_scenario(scenario: &Scenario) -> Result<(), ScenarioError> {
    let mut codes = HashSet::new();

    for row in &scenario.rows {
        if row.debit < Decimal::ZERO || row.credit < Decimal::ZERO {
            return Err(ScenarioError::negative_amount(scenario, row))
        }

        if row.debit.is_zero() == row.credit.is_zero() {
            return Err(ScenarioError::ambiguous_side(scenario, row))
        }

        if !codes.insert(row.code.as_str()) {
            return Err(ScenarioError::duplicate_code(scenario, row))
        }
    }

    if scenario.vat_rows().next().is_none() {
        return Err(ScenarioError::NoVatRows { scenario_id: scenario.id })
    }

    Ok(())
}
