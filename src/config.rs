//! Config file discovery and loading
//!
//! Lookup order: explicit path, then `$BLOCKFALL_CONFIG`, then
//! `blockfall.toml` in the working directory. The first two must exist; the
//! last one is optional and built-in defaults apply without it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::GameConfig;

pub const CONFIG_ENV: &str = "BLOCKFALL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "blockfall.toml";

/// Where the config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli(PathBuf),
    Env(PathBuf),
    WorkingDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Cli(p) | ConfigSource::Env(p) | ConfigSource::WorkingDir(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

/// Pick the config file to read
///
/// `env` is the value of `$BLOCKFALL_CONFIG`, `cwd` the directory searched
/// for `blockfall.toml`.
pub fn resolve_source(cli: Option<&Path>, env: Option<&str>, cwd: &Path) -> ConfigSource {
    if let Some(path) = cli {
        return ConfigSource::Cli(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.is_empty()) {
        return ConfigSource::Env(PathBuf::from(path));
    }
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return ConfigSource::WorkingDir(local);
    }
    ConfigSource::Defaults
}

/// Parse and validate a TOML config file
pub fn load_config_file(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GameConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// Resolve and load the config for this process
pub fn load_config(cli: Option<&Path>) -> Result<GameConfig> {
    let env = std::env::var(CONFIG_ENV).ok();
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let source = resolve_source(cli, env.as_deref(), &cwd);

    match source.path() {
        Some(path) => {
            let config = load_config_file(path)?;
            info!(source = ?source, "loaded config");
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}
