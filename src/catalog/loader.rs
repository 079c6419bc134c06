use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Catalog, ScenarioError};
use crate::models::{AccountRow, Scenario};
use crate::types::ScenarioId;

/// One trial-balance row of a scenario file.
///
/// Rows sharing a `scenario` id form one scenario, kept in file order. The first
/// non-empty `description` of a scenario is used.
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    scenario: ScenarioId,
    scenario_name: String,
    description: Option<String>,
    code: String,
    name: String,
    debit: Option<Decimal>,
    credit: Option<Decimal>,
    vat: bool
}

impl Catalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)?;

        Self::from_csv(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScenarioError> {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, ScenarioError> {
        let mut scenarios: Vec<Scenario> = Vec::new();

        for result in reader.deserialize::<ScenarioRecord>() {
            let record = result?;
            let row = AccountRow::new(
                &record.code,
                &record.name,
                record.debit.unwrap_or_default(),
                record.credit.unwrap_or_default(),
                record.vat
            );

            let index = match scenarios.iter().position(|scenario| scenario.id == record.scenario) {
                Some(index) => index,
                None => {
                    scenarios.push(Scenario {
                        id: record.scenario,
                        name: record.scenario_name.clone(),
                        description: String::new(),
                        rows: Vec::new()
                    });
                    scenarios.len() - 1
                }
            };

            let scenario = &mut scenarios[index];

            if scenario.description.is_empty() {
                if let Some(description) = record.description {
                    scenario.description = description;
                }
            }

            scenario.rows.push(row);
        }

        debug!("Loaded {} scenarios from file", scenarios.len());

        Catalog::new(scenarios)
    }
}
