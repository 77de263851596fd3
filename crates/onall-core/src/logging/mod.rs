use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive applied on top of `RUST_LOG` for the given verbosity.
fn log_directive(quiet: bool) -> &'static str {
    if quiet { "onall=error" } else { "onall=info" }
}

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Logs are JSON lines on stderr so stdout stays reserved for user-facing output.
pub fn init_logging(quiet: bool) {
    let filter = match log_directive(quiet).parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives_parse() {
        // init_logging can only run once per process; the subscriber itself is
        // covered by the CLI integration tests.
        for quiet in [true, false] {
            let parsed: Result<tracing_subscriber::filter::Directive, _> =
                log_directive(quiet).parse();
            assert!(parsed.is_ok());
        }
    }
}
