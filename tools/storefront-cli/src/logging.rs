//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
///
/// `RUST_LOG` wins over the config; `--verbose` raises the default to debug.
/// Returns `false` when a global subscriber was already installed, in which
/// case that subscriber keeps receiving events.
pub fn init(config: &LoggingConfig, verbose: bool) -> bool {
    let default_directive = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };

    match installed {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "log subscriber already installed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_existing_subscriber() {
        let config = LoggingConfig::default();
        // Whichever test installs first, a repeat call must not succeed.
        init(&config, false);
        assert!(!init(&config, true));
    }
}
