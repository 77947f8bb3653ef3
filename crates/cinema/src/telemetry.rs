//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,cinema=debug";

/// Initialize console logging.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects [`DEFAULT_FILTER`] and
/// the quiet default keeps only warnings, so command output stays readable.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = if verbose { DEFAULT_FILTER } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
