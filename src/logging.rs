use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Starts logging to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Keep the returned handle alive
/// for as long as logging is needed.
pub fn setup_logging(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?
        .format(flexi_logger::colored_default_format)
        .start()
}
