//! Game configuration.
//!
//! Defaults suit normal play; `from_env` lets the binary (or a test harness) override
//! them without a config file.

use std::env;

use crate::types::GRAVITY_MS;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the engine's random generator (bag, orientation, spawn column)
    pub seed: u64,
    /// Milliseconds between gravity steps
    pub gravity_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            gravity_ms: GRAVITY_MS,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_gravity_ms(mut self, gravity_ms: u32) -> Self {
        self.gravity_ms = gravity_ms;
        self
    }

    /// Read `TRIS3D_SEED` and `TRIS3D_GRAVITY_MS`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: parse_var("TRIS3D_SEED").unwrap_or(defaults.seed),
            gravity_ms: parse_var("TRIS3D_GRAVITY_MS")
                .filter(|&ms: &u32| ms > 0)
                .unwrap_or(defaults.gravity_ms),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {name}={raw:?}: not a valid value");
            None
        }
    }
}
