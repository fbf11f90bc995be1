//! Logging setup for the `countries` binary.
//!
//! Logs go to stderr so that stdout carries only rendered views.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Whatever `log.level` in the configuration says.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// The level for our own crates, given the configured default.
    #[must_use]
    pub fn level(self, configured: &str) -> String {
        match self {
            Self::Quiet => Level::ERROR.to_string(),
            Self::Normal => configured.to_ascii_lowercase(),
            Self::Verbose => Level::DEBUG.to_string(),
            Self::Trace => Level::TRACE.to_string(),
        }
        .to_ascii_lowercase()
    }

    /// `EnvFilter` directive: dependencies stay at warn, our crates follow
    /// the verbosity.
    #[must_use]
    pub fn directive(self, configured: &str) -> String {
        let level = self.level(configured);
        format!("warn,countries_core={level},countries_cli={level},countries={level}")
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity, configured: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive(configured)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
