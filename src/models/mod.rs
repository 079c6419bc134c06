mod account_row;
mod action;
mod centralizer;
mod feedback;
mod journal_line;
mod scenario;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use account_row::AccountRow;
pub use action::{Action, ActionType};
pub use centralizer::Centralizer;
pub use feedback::{Feedback, FeedbackKind};
pub use journal_line::{JournalLine, JournalTotals};
pub use scenario::Scenario;

/// The column an amount sits in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Side {
    Debit,
    Credit
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Debit => Side::Credit,
            Side::Credit => Side::Debit
        }
    }
}

impl Display for Side {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Debit => write!(formatter, "debit"),
            Side::Credit => write!(formatter, "credit")
        }
    }
}
