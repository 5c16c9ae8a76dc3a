//! src/telemetry.rs
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

/// Installs the process-wide subscriber: console output plus a file sink.
/// The returned guard must stay alive for the file writer to flush.
pub fn init_tracing(log_directory: &str, file_name_prefix: &str) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_directory)?;
    let file_appender = tracing_appender::rolling::never(log_directory, file_name_prefix);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(file_writer),
        )
        .try_init()?;

    Ok(guard)
}
