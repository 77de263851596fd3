use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info};

use onall_core::{DiscoveredWindow, OsProfile, broadcast_ops, events};

use super::helpers::load_config_with_warning;
use crate::table::TableFormatter;

#[derive(Serialize)]
struct ListOutput<'a> {
    profile: &'a OsProfile,
    windows: &'a [DiscoveredWindow],
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_started", json_output);

    let config = load_config_with_warning();

    let (profile, windows) = match broadcast_ops::discover_windows(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Could not discover terminal windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        let output = ListOutput {
            profile: &profile,
            windows: &windows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if windows.is_empty() {
        println!("No terminal windows found.");
    } else {
        println!("Terminal windows ({}):", profile);
        TableFormatter::new(&windows).print_table(&windows);
    }

    info!(event = "cli.list_completed", count = windows.len());

    Ok(())
}
