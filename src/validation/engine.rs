use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{AccountRow, JournalLine, JournalTotals};
use crate::types::{within, CENTRALIZER_TOLERANCE};
use crate::validation::{NetPosition, Violation};

/// Outcome of grading one journal entry. There is no partial credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    pub passed: bool,
    /// Failed rules, in evaluation order.
    pub violations: Vec<Violation>
}

impl ValidationVerdict {
    fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            passed: violations.is_empty(),
            violations
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Grades a journal entry against the trial balance it centralizes.
///
/// Every rule is evaluated independently and every failure is reported: VAT
/// completeness, non-VAT contamination, reversal of each transferred line, the
/// centralizing line against the net VAT position, then the global balance.
/// The function is pure, so the same inputs always produce the same verdict.
pub fn validate(rows: &[AccountRow], lines: &[JournalLine]) -> ValidationVerdict {
    let mut violations = Vec::new();

    violations.extend(check_vat_completeness(rows, lines));
    violations.extend(check_non_vat_lines(rows, lines));
    violations.extend(check_reversals(rows, lines));
    violations.extend(check_centralizer(NetPosition::from_rows(rows), lines));
    violations.extend(check_balance(lines));

    ValidationVerdict::from_violations(violations)
}

fn origin<'a>(rows: &'a [AccountRow], line: &JournalLine) -> Option<&'a AccountRow> {
    rows.iter().find(|row| row.code == line.code)
}

fn transferred(lines: &[JournalLine]) -> impl Iterator<Item = &JournalLine> {
    lines.iter().filter(|line| !line.is_manual)
}

fn check_vat_completeness(rows: &[AccountRow], lines: &[JournalLine]) -> Option<Violation> {
    let present: HashSet<&str> = lines.iter().map(|line| line.code.as_str()).collect();

    let codes: Vec<String> = rows.iter()
        .filter(|row| row.is_vat && !present.contains(row.code.as_str()))
        .map(|row| row.code.clone())
        .collect();

    if codes.is_empty() {
        return None
    }

    Some(Violation::MissingVatAccounts { codes })
}

fn check_non_vat_lines(rows: &[AccountRow], lines: &[JournalLine]) -> Option<Violation> {
    let codes: Vec<String> = transferred(lines)
        .filter(|line| origin(rows, line).is_some_and(|row| !row.is_vat))
        .map(|line| line.code.clone())
        .collect();

    if codes.is_empty() {
        return None
    }

    Some(Violation::NonVatAccounts { codes })
}

fn check_reversals(rows: &[AccountRow], lines: &[JournalLine]) -> Vec<Violation> {
    transferred(lines)
        .filter_map(|line| {
            let expected = origin(rows, line)?.side().opposite();

            if line.amount_on(expected) > Decimal::ZERO {
                return None
            }

            Some(Violation::NotSettled { code: line.code.clone(), expected })
        })
        .collect()
}

fn check_centralizer(position: NetPosition, lines: &[JournalLine]) -> Option<Violation> {
    //NOTE: Only the first centralizing line is graded, any extra one shows up in the balance check
    let centralizer = lines.iter().find(|line| line.is_manual);

    match (position.expected(), centralizer) {
        (None, None) => None,
        (None, Some(_)) => Some(Violation::UnnecessaryCentralizer),
        (Some(_), None) => Some(Violation::MissingCentralizer),
        (Some((account, expected)), Some(line)) => {
            if line.code != account.code() {
                Some(Violation::WrongCentralizerAccount { expected: account })
            } else if line.amount_on(account.side()) <= Decimal::ZERO {
                Some(Violation::WrongCentralizerSide { account })
            } else if !within(line.amount(), expected, CENTRALIZER_TOLERANCE) {
                Some(Violation::WrongCentralizerAmount { account, expected })
            } else {
                None
            }
        }
    }
}

fn check_balance(lines: &[JournalLine]) -> Option<Violation> {
    let totals = JournalTotals::from_lines(lines);

    if totals.is_balanced {
        return None
    }

    Some(Violation::Unbalanced { gap: totals.diff })
}
