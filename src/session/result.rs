use crate::journal::JournalState;
use crate::models::{AccountRow, JournalLine, JournalTotals, Scenario};
use crate::types::{LearnerId, ScenarioId};

/// Snapshot of one finished scenario, handed to report rendering as read-only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    pub scenario_id: ScenarioId,
    pub scenario_name: String,
    /// The VAT subset of the trial balance, shown next to the entry for context.
    pub vat_rows: Vec<AccountRow>,
    pub lines: Vec<JournalLine>,
    pub totals: JournalTotals,
    pub passed: bool
}

impl ScenarioResult {
    pub fn capture(scenario: &Scenario, journal: &JournalState) -> Self {
        Self {
            scenario_id: scenario.id,
            scenario_name: scenario.name.clone(),
            vat_rows: scenario.vat_rows().cloned().collect(),
            lines: journal.lines().to_vec(),
            totals: journal.totals(),
            passed: journal.is_locked()
        }
    }
}

/// Ordered results of every scenario a learner completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub learner: LearnerId,
    pub results: Vec<ScenarioResult>
}
