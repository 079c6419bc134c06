use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::journal::JournalError;
use crate::models::{AccountRow, Centralizer, JournalLine, JournalTotals};
use crate::types::LineId;

pub const NOTHING_NEW_MESSAGE: &str = "No new account selected, or the selected accounts are already in the journal.";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransferOutcome {
    /// This many lines were appended.
    Appended(usize),
    /// Every selected row was already present, or nothing was selected.
    NothingNew
}

impl TransferOutcome {
    /// Informational message for the learner. Not a validation failure.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            TransferOutcome::Appended(_) => None,
            TransferOutcome::NothingNew => Some(NOTHING_NEW_MESSAGE)
        }
    }
}

/// The journal entry a learner builds for one scenario attempt.
///
/// Lines keep their insertion order. At most one transferred line exists per
/// account code; centralizing lines are never merged, so the same centralizer
/// may appear several times. Once locked, every mutation is refused.
#[derive(Debug, Clone, Default)]
pub struct JournalState {
    lines: Vec<JournalLine>,
    locked: bool,
    next_line_id: LineId
}

impl JournalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    pub fn totals(&self) -> JournalTotals {
        JournalTotals::from_lines(&self.lines)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Freezes the journal once its entry has been graded as correct.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// First line carrying `code`, transferred or manual.
    pub fn find_line(&self, code: &str) -> Option<&JournalLine> {
        self.lines.iter().find(|line| line.code == code)
    }

    /// Appends one line per balance row whose code is not yet in the journal.
    ///
    /// # Errors
    /// Returns `JournalError::Locked` if the journal has been validated.
    pub fn transfer<'a, I>(&mut self, rows: I) -> Result<TransferOutcome, JournalError>
    where
        I: IntoIterator<Item = &'a AccountRow>,
    {
        self.check_unlocked()?;

        let mut present: HashSet<String> = self.lines.iter().map(|line| line.code.clone()).collect();
        let mut appended = 0;

        for row in rows {
            if !present.insert(row.code.clone()) {
                debug!("Account [{}] is already in the journal, skipping", row.code);
                continue;
            }

            let line_id = self.allocate_line_id();
            self.lines.push(JournalLine::transferred(line_id, row));
            appended += 1;
        }

        if appended == 0 {
            return Ok(TransferOutcome::NothingNew)
        }

        Ok(TransferOutcome::Appended(appended))
    }

    /// Moves the amount of a line to the opposite column.
    ///
    /// # Errors
    /// Returns `JournalError` if the journal is locked or the line does not exist.
    pub fn reverse(&mut self, line_id: LineId) -> Result<(), JournalError> {
        self.check_unlocked()?;

        let line = self.lines.iter_mut()
            .find(|line| line.line_id == line_id)
            .ok_or(JournalError::LineNotFound { line_id })?;

        line.reverse();

        Ok(())
    }

    /// Appends a centralizing line, placing `amount` on the side dictated by the account.
    ///
    /// # Errors
    /// Returns `JournalError` if the journal is locked or `amount` is not strictly positive.
    pub fn add_centralizer(&mut self, account: Centralizer, amount: Decimal) -> Result<LineId, JournalError> {
        self.check_unlocked()?;

        if amount <= Decimal::ZERO {
            return Err(JournalError::NonPositiveAmount { amount })
        }

        let line_id = self.allocate_line_id();
        self.lines.push(JournalLine::manual(line_id, account, amount));

        Ok(line_id)
    }

    /// # Errors
    /// Returns `JournalError` if the journal is locked or the line does not exist.
    pub fn remove(&mut self, line_id: LineId) -> Result<JournalLine, JournalError> {
        self.check_unlocked()?;

        let index = self.lines.iter()
            .position(|line| line.line_id == line_id)
            .ok_or(JournalError::LineNotFound { line_id })?;

        Ok(self.lines.remove(index))
    }

    /// Clears every line. Only available until the journal is locked.
    pub fn reset(&mut self) -> Result<(), JournalError> {
        self.check_unlocked()?;
        self.lines.clear();

        Ok(())
    }

    fn check_unlocked(&self) -> Result<(), JournalError> {
        if self.locked {
            return Err(JournalError::Locked)
        }

        Ok(())
    }

    fn allocate_line_id(&mut self) -> LineId {
        self.next_line_id += 1;
        self.next_line_id
    }
}
