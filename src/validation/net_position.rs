use rust_decimal::Decimal;

use crate::models::{AccountRow, Centralizer};
use crate::types::BALANCE_TOLERANCE;

/// What the VAT accounts of a trial balance net out to.
///
/// The amount carried by `Payable` and `Recoverable` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetPosition {
    /// VAT owed and VAT reclaimable cancel out within the tolerance.
    None,
    Payable(Decimal),
    Recoverable(Decimal)
}

impl NetPosition {
    /// Sum of VAT credits minus sum of VAT debits. Non-VAT rows are ignored.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a AccountRow>,
    {
        let net: Decimal = rows.into_iter()
            .filter(|row| row.is_vat)
            .map(|row| row.credit - row.debit)
            .sum();

        if net.abs() <= BALANCE_TOLERANCE {
            NetPosition::None
        } else if net.is_sign_positive() {
            NetPosition::Payable(net)
        } else {
            NetPosition::Recoverable(net.abs())
        }
    }

    /// The centralizing account and amount a correct entry must contain, if any.
    pub fn expected(&self) -> Option<(Centralizer, Decimal)> {
        match *self {
            NetPosition::None => None,
            NetPosition::Payable(amount) => Some((Centralizer::Payable, amount)),
            NetPosition::Recoverable(amount) => Some((Centralizer::Recoverable, amount))
        }
    }
}
