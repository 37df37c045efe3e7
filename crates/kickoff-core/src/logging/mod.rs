//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global JSON subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise kickoff crates log at `info`, or
/// only warnings and errors when `quiet` is set. Calling this again after a
/// subscriber is installed is a no-op.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(quiet));

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(event = "core.logging.initialized", quiet = quiet);
    }
}

fn default_filter(quiet: bool) -> EnvFilter {
    let level = if quiet { "warn" } else { "info" };
    EnvFilter::new(format!("kickoff_core={level},kickoff_config={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(true).to_string().contains("kickoff_core=warn"));
        assert!(default_filter(false).to_string().contains("kickoff_core=info"));
    }
}
