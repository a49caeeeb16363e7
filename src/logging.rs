use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::stderr_buffer;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "lexidrill=warn";
const VERBOSE_DIRECTIVE: &str = "lexidrill=debug";

/// Filter directive for the given verbosity
pub fn directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug output for this
/// crate. Everything goes through [`stderr_buffer`], which holds lines back
/// while the TUI owns the terminal.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose)));

    // Ignored if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(stderr_buffer::writer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(directive(false), "lexidrill=warn");
        assert_eq!(directive(true), "lexidrill=debug");
    }

    #[test]
    fn test_directives_parse() {
        assert!(DEFAULT_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
        assert!(directive(true).parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
