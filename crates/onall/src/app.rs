use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("onall")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a command in every open terminal window")
        .long_about("onall finds every open terminal window on this machine and types the given command into each one, followed by Enter. It uses Terminal.app scripting on macOS, xdotool on Linux (X11) and console windows on Windows.\n\nAll words after the options are joined with single spaces and sent exactly as written.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List terminal windows without sending anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("command")
                .help("Command to run in every terminal window")
                .num_args(1..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true) // Everything after the first word belongs to the command
                .required_unless_present("list")
                .conflicts_with("list"),
        )
        .arg_required_else_help(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_words(matches: &clap::ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("command")
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "onall");
    }

    #[test]
    fn test_cli_collects_command_words() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "git", "pull", "--rebase"])
            .unwrap();
        assert_eq!(command_words(&matches), vec!["git", "pull", "--rebase"]);
        assert!(!matches.get_flag("list"));
    }

    #[test]
    fn test_cli_flags_after_command_belong_to_command() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "ls", "-v", "--json"])
            .unwrap();
        assert_eq!(command_words(&matches), vec!["ls", "-v", "--json"]);
        assert!(!matches.get_flag("verbose"));
        assert!(!matches.get_flag("json"));
    }

    #[test]
    fn test_cli_verbose_flag_short() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "-v", "echo", "hi"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(command_words(&matches), vec!["echo", "hi"]);
    }

    #[test]
    fn test_cli_verbose_flag_long() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "--verbose", "uptime"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_verbose_flag_default_false() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["onall", "uptime"]).unwrap();
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_double_dash_allows_leading_hyphen_command() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "--", "-weird", "arg"])
            .unwrap();
        assert_eq!(command_words(&matches), vec!["-weird", "arg"]);
    }

    #[test]
    fn test_cli_list_without_command() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["onall", "--list", "--json"])
            .unwrap();
        assert!(matches.get_flag("list"));
        assert!(matches.get_flag("json"));
        assert!(command_words(&matches).is_empty());
    }

    #[test]
    fn test_cli_list_conflicts_with_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["onall", "--list", "ls"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_requires_command_or_list() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["onall", "--json"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_no_args_is_error() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["onall"]);
        assert!(matches.is_err());
    }
}
