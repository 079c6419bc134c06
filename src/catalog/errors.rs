use thiserror::Error;

use crate::models::{AccountRow, Scenario};
use crate::types::ScenarioId;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario catalog is empty")]
    EmptyCatalog,
    #[error("Scenario [{scenario_id}] has no VAT account to centralize")]
    NoVatRows {
        scenario_id: ScenarioId
    },
    #[error("Account [{code}] appears more than once in scenario [{scenario_id}]")]
    DuplicateCode {
        scenario_id: ScenarioId,
        code: String
    },
    #[error("Account [{code}] in scenario [{scenario_id}] must carry a balance on exactly one side")]
    AmbiguousSide {
        scenario_id: ScenarioId,
        code: String
    },
    #[error("Account [{code}] in scenario [{scenario_id}] has a negative amount")]
    NegativeAmount {
        scenario_id: ScenarioId,
        code: String
    },
    #[error("Scenario file error: {0}")]
    Csv(#[from] csv::Error)
}

impl ScenarioError {
    pub fn duplicate_code(scenario: &Scenario, row: &AccountRow) -> Self {
        Self::DuplicateCode { scenario_id: scenario.id, code: row.code.clone() }
    }

    pub fn ambiguous_side(scenario: &Scenario, row: &AccountRow) -> Self {
        Self::AmbiguousSide { scenario_id: scenario.id, code: row.code.clone() }
    }

    pub fn negative_amount(scenario: &Scenario, row: &AccountRow) -> Self {
        Self::NegativeAmount { scenario_id: scenario.id, code: row.code.clone() }
    }
}
