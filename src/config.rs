use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{validate_tau, InterleavingError, Result};
use crate::interleaving::DEFAULT_TAU;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterleavingConfig {
    pub tau: f64,
    pub seed: Option<u64>,
}

impl Default for InterleavingConfig {
    fn default() -> Self {
        Self {
            tau: DEFAULT_TAU,
            seed: None,
        }
    }
}

impl InterleavingConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path).map_err(|err| {
                    InterleavingError::Config(format!("failed to read config: {}", err))
                })?;
                toml::from_str(&contents).map_err(|err| {
                    InterleavingError::Config(format!("failed to parse config: {}", err))
                })?
            } else {
                InterleavingConfig::default()
            }
        } else {
            InterleavingConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                InterleavingError::Config(format!("failed to create config dir: {}", err))
            })?;
        }
        let payload = toml::to_string_pretty(self).map_err(|err| {
            InterleavingError::Config(format!("failed to serialize config: {}", err))
        })?;
        std::fs::write(path, payload).map_err(|err| {
            InterleavingError::Config(format!("failed to write config: {}", err))
        })?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_tau(self.tau).map(|_| ())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(tau) = env::var("INTERLEAVING_TAU") {
            if let Ok(value) = tau.trim().parse::<f64>() {
                self.tau = value;
            }
        }
        if let Ok(seed) = env::var("INTERLEAVING_SEED") {
            if let Ok(value) = seed.trim().parse::<u64>() {
                self.seed = Some(value);
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("INTERLEAVING_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/interleaving.toml")))
}
