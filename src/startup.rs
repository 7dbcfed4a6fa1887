use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::AppError};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,serenity=warn";

/// Installs the global tracing subscriber.
///
/// Every event is written twice with the same timestamped, leveled text format:
/// once to standard output and once appended to the configured log file. The
/// file layer writes without ANSI colors. `RUST_LOG` overrides the default
/// filter for both.
///
/// # Arguments
/// - `config` - Application configuration providing the log file path
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LogFileErr)` - Log file could not be opened for appending
/// - `Err(AppError::LoggingErr)` - A global subscriber was already installed
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .try_init()?;

    Ok(())
}
