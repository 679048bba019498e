//! Engine configuration
//!
//! Settings are read from a `sqlmath.toml` file and may be overridden by
//! environment variables.
//!
//! ## Environment Variables
//!
//! - `SQLMATH_IGNORE_TRUNCATE` - `true`/`false`, `1`/`0`
//! - `SQLMATH_RAND_SEED` - seed for `RAND()` calls without a seed argument
//!
//! These can be set in a `.env` file next to the configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::EvalContext;
use crate::error::{MathError, MathResult};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "sqlmath.toml";

/// Environment variable names
pub const ENV_IGNORE_TRUNCATE: &str = "SQLMATH_IGNORE_TRUNCATE";
pub const ENV_RAND_SEED: &str = "SQLMATH_RAND_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Accept partially numeric strings without error or warning
    pub ignore_truncate: bool,
    /// Seed for unseeded `RAND()`; a random seed is drawn when absent
    pub default_rand_seed: Option<i64>,
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> MathResult<Self> {
        toml::from_str(content).map_err(|e| MathError::ConfigError(e.to_string()))
    }

    /// Load a configuration file, then apply `.env` and environment overrides.
    ///
    /// A `.env` file in the same directory is loaded first when present.
    pub fn load(path: &Path) -> MathResult<Self> {
        if let Some(dir) = path.parent() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            MathError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults plus environment overrides, reading `.env` from the
    /// working directory if there is one.
    pub fn from_env() -> MathResult<Self> {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`. Empty values are ignored, unparsable
    /// ones are errors.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> MathResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_IGNORE_TRUNCATE).filter(|v| !v.is_empty()) {
            self.ignore_truncate = parse_bool(ENV_IGNORE_TRUNCATE, &value)?;
        }
        if let Some(value) = lookup(ENV_RAND_SEED).filter(|v| !v.is_empty()) {
            let seed = value.trim().parse::<i64>().map_err(|_| {
                MathError::ConfigError(format!("{} must be an integer, got '{}'", ENV_RAND_SEED, value))
            })?;
            self.default_rand_seed = Some(seed);
        }
        Ok(())
    }

    /// Statement context carrying these settings.
    pub fn context(&self) -> EvalContext {
        EvalContext::new()
            .with_ignore_truncate(self.ignore_truncate)
            .with_rand_seed(self.default_rand_seed)
    }
}

fn parse_bool(key: &str, value: &str) -> MathResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(MathError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
