use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let log_dir = log_directory(config);

    std::fs::create_dir_all(&log_dir)
        .context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &config.file_name);

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(false)
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logger initialized, writing to {:?}", log_dir.join(&config.file_name));
    Ok(())
}

/// Directory the rolling log file goes to
pub fn log_directory(config: &LoggingConfig) -> PathBuf {
    if let Some(dir) = &config.directory {
        return dir.clone();
    }

    match std::env::current_exe() {
        Ok(exe_path) => exe_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| {
                eprintln!("Warning: Could not get parent directory of executable, using current directory");
                PathBuf::from(".")
            }),
        Err(e) => {
            eprintln!("Warning: Could not get executable path ({}), using current directory", e);
            PathBuf::from(".")
        }
    }
}
