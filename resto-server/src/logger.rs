//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus optional daily-rotated JSON files.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter (e.g. "info", "resto_server=debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON console lines instead of the human-readable format
/// * `log_dir` - Optional directory for daily-rotated files (`resto-server.YYYY-MM-DD`)
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "resto-server");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
