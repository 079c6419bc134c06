use thiserror::Error;

use crate::journal::JournalError;
use crate::models::ActionType;
use crate::types::{MonetaryError, ScenarioId};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error(transparent)]
    Monetary(#[from] MonetaryError),
    #[error("Account [{code}] is not part of the current trial balance")]
    UnknownRow {
        code: String
    },
    #[error("No journal line for account [{code}]")]
    UnknownLine {
        code: String
    },
    #[error("Account [{code}] is not a centralizer account")]
    UnknownCentralizer {
        code: String
    },
    #[error("Action [{action_type:?}] requires a target")]
    MissingTarget {
        action_type: ActionType
    },
    #[error("Scenario [{scenario_id}] must be validated before moving on")]
    NotValidated {
        scenario_id: ScenarioId
    },
    #[error("Every scenario has been completed")]
    Completed
}
