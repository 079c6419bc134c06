use rust_decimal::Decimal;

use crate::models::Side;

/// A single line of a scenario's trial balance.
///
/// Rows are read-only scenario data. A well-formed row carries its balance on
/// exactly one side; the catalog rejects anything else at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    /// Account number, unique within a scenario.
    pub code: String,
    pub name: String,
    pub debit: Decimal,
    pub credit: Decimal,
    /// Whether the account belongs to the VAT centralization. Never shown to the learner.
    pub is_vat: bool
}

impl AccountRow {
    pub fn new(code: &str, name: &str, debit: Decimal, credit: Decimal, is_vat: bool) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            debit,
            credit,
            is_vat
        }
    }

    /// The natural side of the balance: debit when a debit amount is present, credit otherwise.
    pub fn side(&self) -> Side {
        if self.debit > Decimal::ZERO {
            Side::Debit
        } else {
            Side::Credit
        }
    }
}
