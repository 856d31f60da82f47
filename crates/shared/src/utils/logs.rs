use crate::config::LogConfig;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const QUIET_TARGETS: [&str; 5] = ["hyper=off", "opentelemetry=off", "tonic=off", "h2=off", "sqlx=warn"];

/// Installs the global subscriber: pretty console output filtered by
/// `RUST_LOG`, an optional daily-rolling JSON file, and an optional bridge
/// that forwards events to the OpenTelemetry logger provider.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logger(
    sdk_logger_provider: Option<&SdkLoggerProvider>,
    component: &str,
    log: &LogConfig,
) -> Option<WorkerGuard> {
    let log_dir = if log.dev_mode { "./logs" } else { "/var/log/app" };

    let (file_writer, guard) = if log.enable_file {
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (writer, guard) = non_blocking(file_appender);
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
    });

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let otel_layer = sdk_logger_provider
        .map(|provider| OpenTelemetryTracingBridge::new(provider).with_filter(quiet_filter()));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}

fn quiet_filter() -> EnvFilter {
    QUIET_TARGETS
        .iter()
        .filter_map(|directive| directive.parse().ok())
        .fold(EnvFilter::new("info"), |filter, directive| {
            filter.add_directive(directive)
        })
}
