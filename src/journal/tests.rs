use super::{JournalError, JournalState, TransferOutcome};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::models::{AccountRow, Centralizer, Side};

fn amount(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn balance_rows() -> Result<Vec<AccountRow>> {
    Ok(vec![
        AccountRow::new("4110", "TVA à récupérer sur achats", amount("5200")?, Decimal::ZERO, true),
        AccountRow::new("4510", "TVA à payer sur ventes", Decimal::ZERO, amount("7800")?, true),
        AccountRow::new("4400", "Fournisseurs", Decimal::ZERO, amount("21000")?, false),
    ])
}

#[test]
fn test_transfer_appends_rows_in_order_with_their_original_side() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();

    let outcome = journal.transfer(&rows[..2])?;

    assert_eq!(outcome, TransferOutcome::Appended(2));
    assert_eq!(outcome.notice(), None);

    let lines = journal.lines();

    assert_eq!(lines[0].code, "4110");
    assert_eq!(lines[0].original_side, Some(Side::Debit));
    assert_eq!(lines[1].code, "4510");
    assert_eq!(lines[1].original_side, Some(Side::Credit));
    assert_ne!(lines[0].line_id, lines[1].line_id);

    Ok(())
}

#[test]
fn test_transfer_skips_codes_already_in_the_journal() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();

    journal.transfer(&rows[..1])?;
    let outcome = journal.transfer(&rows)?;

    assert_eq!(outcome, TransferOutcome::Appended(2));
    assert_eq!(journal.lines().len(), 3);
    assert_eq!(journal.lines().iter().filter(|line| line.code == "4110").count(), 1);

    Ok(())
}

#[test]
fn test_transfer_without_new_rows_is_a_neutral_no_op() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();

    journal.transfer(&rows)?;

    let repeated = journal.transfer(&rows)?;
    let empty = journal.transfer(&Vec::<AccountRow>::new())?;

    assert_eq!(repeated, TransferOutcome::NothingNew);
    assert_eq!(empty, TransferOutcome::NothingNew);
    assert!(repeated.notice().is_some());
    assert_eq!(journal.lines().len(), 3);

    Ok(())
}

#[test]
fn test_reverse_swaps_amounts_and_keeps_the_original_side() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows[..1])?;
    let line_id = journal.lines()[0].line_id;

    journal.reverse(line_id)?;

    let line = &journal.lines()[0];

    assert!(line.debit.is_zero());
    assert_eq!(line.credit, amount("5200")?);
    assert_eq!(line.original_side, Some(Side::Debit));

    journal.reverse(line_id)?;

    assert_eq!(journal.lines()[0].debit, amount("5200")?);
    assert!(journal.lines()[0].credit.is_zero());

    Ok(())
}

#[test]
fn test_reverse_unknown_line_fails() {
    let mut journal = JournalState::new();

    assert_eq!(journal.reverse(42), Err(JournalError::LineNotFound { line_id: 42 }));
}

#[test]
fn test_add_centralizer_places_amount_by_account_and_never_merges() -> Result<()> {
    let mut journal = JournalState::new();

    journal.add_centralizer(Centralizer::Payable, amount("2600")?)?;
    journal.add_centralizer(Centralizer::Payable, amount("100")?)?;
    journal.add_centralizer(Centralizer::Recoverable, amount("130")?)?;

    let lines = journal.lines();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].credit, amount("2600")?);
    assert_eq!(lines[1].credit, amount("100")?);
    assert_eq!(lines[2].debit, amount("130")?);
    assert!(lines.iter().all(|line| line.is_manual));

    Ok(())
}

#[test]
fn test_add_centralizer_rejects_non_positive_amounts() -> Result<()> {
    let mut journal = JournalState::new();

    assert!(matches!(journal.add_centralizer(Centralizer::Payable, Decimal::ZERO), Err(JournalError::NonPositiveAmount { .. })));
    assert!(matches!(journal.add_centralizer(Centralizer::Payable, amount("-5")?), Err(JournalError::NonPositiveAmount { .. })));
    assert!(journal.lines().is_empty());

    Ok(())
}

#[test]
fn test_remove_deletes_only_the_named_line() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows)?;
    let line_id = journal.find_line("4510").ok_or_else(|| anyhow!("4510 missing"))?.line_id;

    let removed = journal.remove(line_id)?;

    assert_eq!(removed.code, "4510");
    assert_eq!(journal.lines().len(), 2);
    assert!(journal.find_line("4510").is_none());
    assert_eq!(journal.remove(line_id), Err(JournalError::LineNotFound { line_id }));

    Ok(())
}

#[test]
fn test_removed_code_can_be_transferred_again() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows[..1])?;
    let line_id = journal.lines()[0].line_id;
    journal.remove(line_id)?;

    assert_eq!(journal.transfer(&rows[..1])?, TransferOutcome::Appended(1));

    Ok(())
}

#[test]
fn test_locked_journal_refuses_every_mutation() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows[..2])?;
    let line_id = journal.lines()[0].line_id;
    let before = journal.lines().to_vec();

    journal.lock();

    assert_eq!(journal.transfer(&rows), Err(JournalError::Locked));
    assert_eq!(journal.reverse(line_id), Err(JournalError::Locked));
    assert_eq!(journal.add_centralizer(Centralizer::Payable, amount("10")?), Err(JournalError::Locked));
    assert!(matches!(journal.remove(line_id), Err(JournalError::Locked)));
    assert_eq!(journal.reset(), Err(JournalError::Locked));
    assert_eq!(journal.lines(), before.as_slice());

    Ok(())
}

#[test]
fn test_reset_clears_lines_while_unlocked() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows)?;

    journal.reset()?;

    assert!(journal.lines().is_empty());
    assert!(journal.totals().is_balanced);

    Ok(())
}

#[test]
fn test_totals_follow_every_mutation() -> Result<()> {
    let rows = balance_rows()?;
    let mut journal = JournalState::new();
    journal.transfer(&rows[..2])?;

    let totals = journal.totals();

    assert_eq!(totals.debit, amount("5200")?);
    assert_eq!(totals.credit, amount("7800")?);
    assert_eq!(totals.diff, amount("2600")?);
    assert!(!totals.is_balanced);

    journal.add_centralizer(Centralizer::Recoverable, amount("2600")?)?;

    assert!(journal.totals().is_balanced);

    Ok(())
}
