use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Gap under which journal debit and credit totals count as equal. A net VAT
/// position at or under this magnitude needs no centralizing line.
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Accepted distance between the centralizing amount and the net VAT position.
pub const CENTRALIZER_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Returns true when `lhs` and `rhs` are strictly closer than `tolerance`.
pub fn within(lhs: Decimal, rhs: Decimal, tolerance: Decimal) -> bool {
    (lhs - rhs).abs() < tolerance
}

/// Parses an amount typed by a learner.
///
/// Whitespace, currency symbols and other decoration are dropped and the first
/// comma is read as the decimal separator, so `"2 600,50 €"` parses as `2600.50`.
/// The sign is kept: callers decide whether a negative amount is acceptable.
pub fn parse_amount(input: &str) -> Result<Decimal, MonetaryError> {
    let cleaned: String = input
        .trim()
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(MonetaryError::InvalidFormat(format!("Value '{input}' holds no digits")))
    }

    Ok(Decimal::from_str(&cleaned)?)
}

/// Renders an amount with two decimals and thousands separators, e.g. `€2,600.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}€{grouped}.{fraction}")
}
