use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Whether log output may go to stderr
///
/// The browser draws on the terminal, so it only logs when stderr has been
/// redirected away from it.
pub fn stderr_logging_enabled(interactive: bool, stderr_is_terminal: bool) -> bool {
    !(interactive && stderr_is_terminal)
}

/// Initialize tracing from CLI flags
///
/// Logs always go to stderr so that table and JSON output on stdout stay
/// machine-readable. `RUST_LOG` directives are layered on top of the level.
/// For the interactive browser no subscriber is installed while stderr is
/// the terminal.
pub fn initialize_tracing(log_level: LogLevel, json: bool, interactive: bool) {
    if !stderr_logging_enabled(interactive, std::io::stderr().is_terminal()) {
        return;
    }

    let mut filter = EnvFilter::new(log_level.to_filter_directive());
    if let Ok(extra) = std::env::var("RUST_LOG") {
        for directive in extra.split(',').filter(|d| !d.trim().is_empty()) {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
