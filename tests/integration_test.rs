use std::process::Command;

use anyhow::{anyhow, Result};

const BINARY_PATH: &str = env!("CARGO_BIN_EXE_vat-centralization");

fn run(args: &[&str]) -> Result<Vec<csv::StringRecord>> {
    let output = Command::new(BINARY_PATH)
        .args(args)
        .output()?;

    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let headers = reader.headers()?.clone();

    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["learner", "scenario", "name", "passed", "debit", "credit", "balanced"]);

    Ok(reader.records().collect::<Result<Vec<_>, _>>()?)
}

#[test]
fn test_cli_reports_every_completed_scenario_per_learner() -> Result<()> {
    let records = run(&["samples/workshop.csv"])?;

    assert_eq!(records.len(), 6);

    let expected = [
        ("alex.dupont", "1", "9150.00"),
        ("alex.dupont", "2", "20700.00"),
        ("alex.dupont", "3", "4200.00"),
        ("alex.dupont", "4", "6200.00"),
        ("alex.dupont", "5", "6500.00"),
        ("marc.leroy", "1", "9150.00"),
    ];

    for (record, (learner, scenario, total)) in records.iter().zip(expected) {
        assert_eq!(&record[0], learner);
        assert_eq!(&record[1], scenario);
        assert_eq!(&record[3], "true");
        assert_eq!(&record[4], total);
        assert_eq!(&record[5], total);
        assert_eq!(&record[6], "true");
    }

    Ok(())
}

#[test]
fn test_cli_accepts_a_custom_scenario_file() -> Result<()> {
    let records = run(&["samples/worked_example.csv", "error", "samples/scenarios.csv"])?;
    let record = records.first().ok_or_else(|| anyhow!("jane.doe missing from output"))?;

    assert_eq!(records.len(), 1);
    assert_eq!(&record[0], "jane.doe");
    assert_eq!(&record[2], "Worked example");
    assert_eq!(&record[3], "true");
    assert_eq!(&record[4], "7800.00");
    assert_eq!(&record[5], "7800.00");

    Ok(())
}

#[test]
fn test_cli_rejects_missing_arguments() -> Result<()> {
    let output = Command::new(BINARY_PATH).output()?;

    assert!(!output.status.success());

    Ok(())
}
