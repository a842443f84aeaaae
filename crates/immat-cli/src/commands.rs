use std::io;
use std::time::Instant;

use anyhow::Result;
use immat_cli::batch::{BatchOptions, delimiter_byte, plates_or_lines, read_plates};
use immat_cli::render::{MAX_REJECTED_ROWS, categories_table, counts_table, plates_table, to_json};
use immat_cli::report::{AcceptPolicy, CheckReport, CheckedPlate};
use immat_core::Matriculation;
use tracing::{debug, info, info_span, warn};

use crate::cli::{BatchArgs, CheckArgs, FormatArgs, OutputArg, PolicyArgs};

/// Returns true when every plate was accepted.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let plates = plates_or_stdin(&args.plates)?;
    let policy = accept_policy(&args.policy);
    debug!(count = plates.len(), ?policy, "checking plates");

    let report: CheckReport = plates
        .iter()
        .map(|raw| CheckedPlate::check(raw, None, &policy))
        .collect();
    for plate in report.rejected() {
        warn!(input = %plate.classification.input, "plate rejected");
    }

    match args.output {
        OutputArg::Table => {
            println!("{}", plates_table(&report.plates));
            println!("{}", report.summary_line());
        }
        OutputArg::Json => println!("{}", to_json(&report.plates)?),
    }
    Ok(report.exit_ok(false))
}

pub fn run_format(args: &FormatArgs) -> Result<()> {
    for raw in plates_or_stdin(&args.plates)? {
        println!("{}", Matriculation::from(raw));
    }
    Ok(())
}

/// Returns true when the run should exit successfully.
pub fn run_batch(args: &BatchArgs) -> Result<bool> {
    let span = info_span!("batch", path = %args.path.display(), column = %args.column);
    let _guard = span.enter();
    let start = Instant::now();

    let mut options = BatchOptions::new(&args.column);
    options.delimiter = delimiter_byte(args.delimiter)?;
    options.trim = !args.keep_whitespace;

    let entries = read_plates(&args.path, &options)?;
    let policy = accept_policy(&args.policy);
    let report: CheckReport = entries
        .iter()
        .map(|entry| CheckedPlate::check(&entry.raw, Some(entry.line), &policy))
        .collect();
    info!(
        total = report.total(),
        accepted = report.accepted_count(),
        rejected = report.rejected_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "batch checked"
    );

    match args.output {
        OutputArg::Table => {
            println!("{}", counts_table(&report));
            if report.rejected_count() > 0 {
                println!("Rejected plates (first {MAX_REJECTED_ROWS}):");
                println!(
                    "{}",
                    plates_table(report.rejected().take(MAX_REJECTED_ROWS))
                );
            }
            println!("{}", report.summary_line());
        }
        OutputArg::Json => println!("{}", to_json(&report)?),
    }
    Ok(report.exit_ok(args.allow_invalid))
}

pub fn run_categories() -> Result<()> {
    println!("{}", categories_table());
    Ok(())
}

fn accept_policy(args: &PolicyArgs) -> AcceptPolicy {
    AcceptPolicy::new()
        .with_scheme(args.scheme.map(Into::into))
        .with_categories(args.categories.clone())
}

fn plates_or_stdin(plates: &[String]) -> Result<Vec<String>> {
    plates_or_lines(plates, io::stdin().lock())
}
