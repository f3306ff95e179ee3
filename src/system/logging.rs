//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration.

use crate::config::AppConfig;

/// Initialize logging based on configuration
///
/// Call once during startup, after the configuration has been loaded.
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log writes are flushed on exit.
///
/// # Panics
/// * If opening the log file fails
/// * If a global subscriber is already installed
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let to_file = config
        .logging
        .file
        .as_ref()
        .is_some_and(|f| !f.is_empty());

    // The TUI owns stdout, so console logs go to stderr.
    let writer: Box<dyn std::io::Write + Send + Sync> = if to_file {
        let log_file = config.logging.file.as_ref().map(String::as_str).unwrap_or_default();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    } else {
        Box::new(std::io::stderr())
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!to_file);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
