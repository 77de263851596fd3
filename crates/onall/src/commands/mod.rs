use clap::ArgMatches;

use onall_core::events;

mod broadcast;
mod helpers;
mod list;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    if matches.get_flag("list") {
        list::handle_list_command(matches)
    } else {
        broadcast::handle_broadcast_command(matches)
    }
}
