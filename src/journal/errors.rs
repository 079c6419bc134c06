use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::LineId;

/// Refused journal mutations. None of these change the journal, and none of them
/// count against the learner: the presentation layer simply ignores the action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("Journal is locked after a successful validation")]
    Locked,
    #[error("Journal line [{line_id}] was not found")]
    LineNotFound {
        line_id: LineId
    },
    #[error("Centralizing amount must be positive, got [{amount}]")]
    NonPositiveAmount {
        amount: Decimal
    }
}
