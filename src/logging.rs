//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Events go to stderr so they never interleave with command output.
//!
//! # Log Levels
//!
//! - `warn`: default
//! - `info` (`-v`): dictionary loading
//! - `debug` (`-vv`): game creation, guesses, search queries
//! - `trace` (`-vvv`): individual scrambles

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Map a `-v` count to a level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// `RUST_LOG` wins over the verbosity flag when set
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "word_jumble={level},jumble={level}",
                level = self.level.as_str().to_lowercase()
            ))
        })
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
