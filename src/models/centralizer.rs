use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::Side;

/// The two accounts a learner may add by hand to close the VAT centralization.
///
/// The side of a centralizing line follows from the account: the recoverable
/// account is always debited and the payable account is always credited.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Centralizer {
    Recoverable,
    Payable
}

impl Centralizer {
    pub const ALL: [Centralizer; 2] = [Centralizer::Recoverable, Centralizer::Payable];

    pub fn code(self) -> &'static str {
        match self {
            Centralizer::Recoverable => "4119",
            Centralizer::Payable => "4519"
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Centralizer::Recoverable => "Compte courant administration TVA (À récupérer)",
            Centralizer::Payable => "Compte courant administration TVA (À payer)"
        }
    }

    pub fn side(self) -> Side {
        match self {
            Centralizer::Recoverable => Side::Debit,
            Centralizer::Payable => Side::Credit
        }
    }

    pub fn from_code(code: &str) -> Option<Centralizer> {
        Centralizer::ALL.into_iter().find(|account| account.code() == code.trim())
    }
}

impl Display for Centralizer {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.code())
    }
}
