use crate::models::AccountRow;
use crate::types::ScenarioId;

/// A trial balance handed to the learner, loaded once per attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub rows: Vec<AccountRow>
}

impl Scenario {
    pub fn row(&self, code: &str) -> Option<&AccountRow> {
        self.rows.iter().find(|row| row.code == code)
    }

    pub fn vat_rows(&self) -> impl Iterator<Item = &AccountRow> {
        self.rows.iter().filter(|row| row.is_vat)
    }
}
