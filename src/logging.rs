use std::sync::OnceLock;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::constants::{LOG_PREFIX_SUCCESS, LOG_PREFIX_WARNING};
use crate::error::MockError;

pub struct LogConfig {
    pub debug_enabled: bool,
}

static LOG_CONFIG: OnceLock<LogConfig> = OnceLock::new();

impl LogConfig {
    pub fn init(debug: bool) {
        LOG_CONFIG.get_or_init(|| LogConfig {
            debug_enabled: debug,
        });
    }

    pub fn get() -> &'static LogConfig {
        LOG_CONFIG.get().unwrap_or_else(|| {
            static FALLBACK: LogConfig = LogConfig {
                debug_enabled: false,
            };
            &FALLBACK
        })
    }
}

pub fn setup_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level
        .to_lowercase()
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "\x1b[1;31merror:\x1b[0m",
                log::Level::Warn => "\x1b[1;33mwarn:\x1b[0m",
                log::Level::Info => "\x1b[1;32minfo:\x1b[0m",
                log::Level::Debug => "\x1b[1;34mdebug:\x1b[0m",
                log::Level::Trace => "\x1b[1;35mtrace:\x1b[0m",
            };
            out.finish(format_args!(
                "{} {} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level_str,
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

pub fn log_request(method: &str, path: &str, model: Option<&str>) {
    match model {
        Some(m) if !m.is_empty() => log::info!(
            "{} {} (model: {})",
            method,
            sanitize_log_message(path),
            sanitize_log_message(m)
        ),
        _ => log::info!("{} {}", method, sanitize_log_message(path)),
    }
}

pub fn log_timed(prefix: &str, operation: &str, start: Instant) {
    let duration = start.elapsed();
    let formatted_duration = format_duration(duration);

    match prefix {
        LOG_PREFIX_SUCCESS => log::info!("{} | {}", operation, formatted_duration),
        LOG_PREFIX_WARNING => log::warn!("{} | {}", operation, formatted_duration),
        _ => log::info!("{} | {}", operation, formatted_duration),
    }
}

/// Timed log line for a request turned away by model validation.
pub fn log_rejected_model(operation: &str, error: &MockError, start: Instant) {
    let Some(model) = error.missing_model() else {
        return;
    };
    log_timed(
        LOG_PREFIX_WARNING,
        &format!(
            "{} rejected - unsupported model '{}'",
            operation,
            sanitize_log_message(model)
        ),
        start,
    );
}

pub fn format_duration(duration: Duration) -> String {
    let total_nanos = duration.as_nanos();

    if total_nanos < 1_000_000 {
        format!("{:.1}µs", total_nanos as f64 / 1_000.0)
    } else if total_nanos < 1_000_000_000 {
        format!("{:.2}ms", total_nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", total_nanos as f64 / 1_000_000_000.0)
    }
}

pub fn sanitize_log_message(message: &str) -> String {
    message
        .chars()
        .map(|c| {
            if c.is_control() && !matches!(c, '\t' | '\n' | '\r') {
                '?'
            } else {
                c
            }
        })
        .collect()
}

/// Pretty-prints handler input and output when debug logging is on.
pub fn log_handler_io<Req, Res>(endpoint: &str, request: Option<&Req>, response: Option<&Res>)
where
    Req: Serialize + ?Sized,
    Res: Serialize + ?Sized,
{
    if !LogConfig::get().debug_enabled {
        return;
    }

    if let Some(request_value) = request {
        log::debug!(
            "{} request: {}",
            endpoint,
            serde_json::to_string_pretty(request_value).unwrap_or_default()
        );
    }

    if let Some(response_value) = response {
        log::debug!(
            "{} response: {}",
            endpoint,
            serde_json::to_string_pretty(response_value).unwrap_or_default()
        );
    }
}
