//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::ConsoleConfig;

/// Log file name prefix; the appender adds the date suffix
pub const LOG_FILE_NAME: &str = "admin-console.log";

/// Keeps the non-blocking log writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotating log file under `config.log_dir`
/// - Non-blocking writes so network calls never wait on disk
/// - A stderr layer when `verbose` is set (file output stays on regardless)
/// - Panic hook integration for crash logging
///
/// `RUST_LOG` wins over `config.log_level`. When the log directory cannot be
/// created, only the stderr layer (if any) remains.
pub fn init(config: &ConsoleConfig, verbose: bool) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("admin_console=info,warn"));

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .with_filter(EnvFilter::new("admin_console=debug,warn"))
    });

    let (file_layer, file_guard) = match fs::create_dir_all(&config.log_dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // No ANSI codes in log files
                .with_filter(env_filter);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log directory {}: {}",
                config.log_dir.display(),
                e
            );
            (None, None)
        }
    };

    // A second init (tests, embedding) keeps the first subscriber
    if tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        return LogGuard { _file: file_guard };
    }

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_level = %config.log_level,
        api = %config.api_base_url,
        verbose,
        "Logging initialized"
    );

    setup_panic_hook();

    LogGuard { _file: file_guard }
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(
            location = %location,
            message = %message,
            backtrace = %backtrace,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
