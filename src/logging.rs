//! Tracing subscriber setup for the command-line front-end.

use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


/// Initialize the global tracing subscriber: a console layer filtered by
/// `console_level_filter` and, when `log_file_directory` is given, an
/// additional non-blocking file layer writing `log_file_name` inside that
/// directory.
///
/// The returned guard must be kept alive for the lifetime of the process,
/// otherwise buffered log lines can be lost on exit.
pub fn initialize_tracing(
    console_level_filter: EnvFilter,
    log_file_directory: Option<&Path>,
    log_file_name: &str,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_level_filter);

    let registry = tracing_subscriber::registry().with(console_layer);

    match log_file_directory {
        Some(log_file_directory) => {
            std::fs::create_dir_all(log_file_directory)
                .into_diagnostic()
                .wrap_err("Failed to create missing log file directory.")?;

            let (non_blocking_writer, worker_guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::never(log_file_directory, log_file_name),
            );

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer);

            registry
                .with(file_layer)
                .try_init()
                .into_diagnostic()
                .wrap_err("Failed to initialize the tracing subscriber.")?;

            Ok(Some(worker_guard))
        }
        None => {
            registry
                .try_init()
                .into_diagnostic()
                .wrap_err("Failed to initialize the tracing subscriber.")?;

            Ok(None)
        }
    }
}
