use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Centralizer, Side};
use crate::types::format_currency;

/// One failed grading rule. The `Display` output is the message shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Missing VAT accounts: {}.", .codes.join(", "))]
    MissingVatAccounts {
        codes: Vec<String>
    },
    #[error("Non-VAT accounts transferred: {}.", .codes.join(", "))]
    NonVatAccounts {
        codes: Vec<String>
    },
    #[error("Account {code} is not settled (it should be on the {expected} side).")]
    NotSettled {
        code: String,
        expected: Side
    },
    #[error("Missing centralizer account ({} or {}).", Centralizer::Recoverable, Centralizer::Payable)]
    MissingCentralizer,
    #[error("Net VAT {}: use account {expected}.", position(.expected))]
    WrongCentralizerAccount {
        expected: Centralizer
    },
    #[error("Account {account} must be on the {} side.", .account.side())]
    WrongCentralizerSide {
        account: Centralizer
    },
    #[error("Incorrect amount for {account}. Expected: {}.", currency(.expected))]
    WrongCentralizerAmount {
        account: Centralizer,
        expected: Decimal
    },
    #[error("Net VAT is nil: no centralizer account is needed.")]
    UnnecessaryCentralizer,
    #[error("The entry is not balanced (gap: {}).", currency(.gap))]
    Unbalanced {
        gap: Decimal
    }
}

fn position(account: &Centralizer) -> &'static str {
    match account {
        Centralizer::Recoverable => "recoverable",
        Centralizer::Payable => "payable"
    }
}

fn currency(amount: &Decimal) -> String {
    format_currency(*amount)
}
