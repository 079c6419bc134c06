use std::io::{stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use vat_centralization::catalog::Catalog;
use vat_centralization::engine::WorkshopEngine;
use vat_centralization::storage::ReportStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vat-centralization [actions].csv [log_level:optional] [scenarios].csv:optional > [report].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Without a scenarios file the built-in workshop is used");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let catalog = match args.get(3) {
        Some(scenarios_path) => Catalog::from_path(scenarios_path)?,
        None => Catalog::builtin()?
    };

    info!("Loaded {} scenarios", catalog.len());

    let storage = Arc::new(ReportStorage::new());
    let engine = WorkshopEngine::new(Arc::new(catalog), storage.clone());

    let timer = Instant::now();
    engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Replayed learner actions in: {duration:?}");

    write_results_to_stdout(&storage)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(storage: &ReportStorage) -> Result<()> {
    let mut output = csv::Writer::from_writer(stdout().lock());

    output.write_record(["learner", "scenario", "name", "passed", "debit", "credit", "balanced"])?;

    for report in storage.reports() {
        for result in &report.results {
            output.write_record([
                report.learner.clone(),
                result.scenario_id.to_string(),
                result.scenario_name.clone(),
                result.passed.to_string(),
                format!("{:.2}", result.totals.debit),
                format!("{:.2}", result.totals.credit),
                result.totals.is_balanced.to_string()
            ])?;
        }
    }

    output.flush()?;

    Ok(())
}
