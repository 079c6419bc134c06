use rust_decimal::Decimal;

use crate::models::{AccountRow, Centralizer, Side};
use crate::types::{within, LineId, BALANCE_TOLERANCE};

/// One line of the learner's journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalLine {
    /// Identifier assigned by the journal, unique for the attempt.
    pub line_id: LineId,
    pub code: String,
    pub name: String,
    pub debit: Decimal,
    pub credit: Decimal,
    /// True for centralizing lines typed by the learner, false for lines transferred from the balance.
    pub is_manual: bool,
    /// Side of the balance row before any reversal. Only set on transferred lines.
    pub original_side: Option<Side>
}

impl JournalLine {
    pub fn transferred(line_id: LineId, row: &AccountRow) -> Self {
        Self {
            line_id,
            code: row.code.clone(),
            name: row.name.clone(),
            debit: row.debit,
            credit: row.credit,
            is_manual: false,
            original_side: Some(row.side())
        }
    }

    pub fn manual(line_id: LineId, account: Centralizer, amount: Decimal) -> Self {
        let (debit, credit) = match account.side() {
            Side::Debit => (amount, Decimal::ZERO),
            Side::Credit => (Decimal::ZERO, amount)
        };

        Self {
            line_id,
            code: account.code().to_string(),
            name: account.name().to_string(),
            debit,
            credit,
            is_manual: true,
            original_side: None
        }
    }

    /// Moves the amount to the opposite column. Applying it twice restores the line.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.debit, &mut self.credit);
    }

    pub fn amount(&self) -> Decimal {
        self.debit + self.credit
    }

    pub fn amount_on(&self, side: Side) -> Decimal {
        match side {
            Side::Debit => self.debit,
            Side::Credit => self.credit
        }
    }
}

/// Column totals of a journal, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalTotals {
    pub debit: Decimal,
    pub credit: Decimal,
    /// Absolute gap between the two columns.
    pub diff: Decimal,
    pub is_balanced: bool
}

impl JournalTotals {
    pub fn from_lines(lines: &[JournalLine]) -> Self {
        let debit: Decimal = lines.iter().map(|line| line.debit).sum();
        let credit: Decimal = lines.iter().map(|line| line.credit).sum();

        Self {
            debit,
            credit,
            diff: (debit - credit).abs(),
            is_balanced: within(debit, credit, BALANCE_TOLERANCE)
        }
    }
}
