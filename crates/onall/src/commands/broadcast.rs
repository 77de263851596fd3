use clap::ArgMatches;
use tracing::info;

use onall_core::{BroadcastCommand, BroadcastReport, broadcast_ops};

use super::helpers::load_config_with_warning;

/// Broadcast the joined command words to every terminal window.
///
/// Always succeeds once arguments are parsed: problems are printed as
/// diagnostics, not turned into a failing exit status.
pub(crate) fn handle_broadcast_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let words: Vec<String> = matches
        .get_many::<String>("command")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let command = BroadcastCommand::from_args(&words);
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.broadcast_started",
        command = command.as_str(),
        json_output
    );

    let config = load_config_with_warning();
    let report = broadcast_ops::broadcast(&command, &config);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    info!(
        event = "cli.broadcast_completed",
        delivered = report.delivered_count(),
        failed = report.failed_count(),
        skipped = report.skipped_count()
    );

    Ok(())
}

fn print_report(report: &BroadcastReport) {
    for line in report.diagnostics() {
        println!("{}", line);
    }
    if let Some(summary) = report.summary() {
        println!("{}", summary);
    }
}
