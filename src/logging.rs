//! File logging for the terminal binary.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records go to a file instead of stderr.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file; `None` disables logging.
    pub path: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// Reads `SNAKE_LOG_PATH` and `SNAKE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("SNAKE_LOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        // Unparseable levels keep the default.
        let level = lookup("SNAKE_LOG_LEVEL")
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { path, level }
    }
}

/// Install a `WriteLogger` for `cfg`.
///
/// Returns `false` without touching the global logger when there is no
/// path or the level is `Off`.
pub fn init(cfg: &LogConfig) -> Result<bool> {
    let Some(path) = cfg.path.as_ref().filter(|_| cfg.level != LevelFilter::Off) else {
        return Ok(false);
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(cfg.level, config, file).context("installing logger")?;
    Ok(true)
}

pub fn init_from_env() -> Result<LogConfig> {
    let cfg = LogConfig::from_env();
    init(&cfg)?;
    Ok(cfg)
}
