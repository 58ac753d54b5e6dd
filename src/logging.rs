//! File logging for the terminal binary.
//!
//! The game owns the terminal, so log records never go to stderr. Setting
//! `TRIS3D_LOG_PATH` sends them to a file instead; without it logging stays off.

use std::env;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
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
    /// Read `TRIS3D_LOG_PATH` and `TRIS3D_LOG_LEVEL` (error/warn/info/debug/trace/off).
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("TRIS3D_LOG_PATH").ok().as_deref(),
            env::var("TRIS3D_LOG_LEVEL").ok().as_deref(),
        )
    }

    fn from_vars(path: Option<&str>, level: Option<&str>) -> Self {
        let path = path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let level = level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { path, level }
    }
}

/// Install the global logger. Returns false when logging is disabled.
pub fn install(config: &LogConfig) -> Result<bool> {
    let Some(path) = &config.path else {
        return Ok(false);
    };
    if config.level == LevelFilter::Off {
        return Ok(false);
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    simplelog::WriteLogger::init(
        config.level,
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .set_thread_level(LevelFilter::Off)
            .build(),
        file,
    )
    .context("logger already installed")?;

    log::info!("logging to {}", path.display());
    Ok(true)
}
