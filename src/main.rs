use std::process::ExitCode;

use probestore::harness::config::{HarnessConfig, USAGE};
use probestore::harness::{self, FileSummary};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|i| i == "-h" || i == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = match HarnessConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut failed = false;
    for (input, strategy, res) in harness::run(&config) {
        match res {
            Ok(summary) => print_summary(&summary),
            Err(err) => {
                eprintln!("Exception: {} ({strategy}): {err}", input.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_summary(summary: &FileSummary) {
    for token in &summary.skipped {
        eprintln!("Error parsing integer: {token}");
    }

    let phases = summary
        .phases
        .iter()
        .map(|p| format!("{} +{}", p.phase.title(), p.collisions))
        .collect::<Vec<_>>()
        .join(", ");
    let total = summary.phases.last().map(|p| p.total_collisions).unwrap_or(0);

    println!(
        "{} [{}]: {total} collisions ({phases}) -> {}, {}",
        summary.input.display(),
        summary.strategy,
        summary.collisions_report.display(),
        summary.tables_report.display()
    );
}
