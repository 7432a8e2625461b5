use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::{
    domain::{SessionFlags, TargetBounds, DEFAULT_LOG_FILE, MAX_TASKS, MIN_TASKS},
    error::ConfigError,
};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "tracker.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_file: PathBuf,
    pub bounds: TargetBounds,
    pub flags: SessionFlags,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            bounds: TargetBounds::default(),
            flags: SessionFlags::default(),
            seed: None,
        }
    }
}

/// Values taken from the command line. Switches can only turn features on.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub min_tasks: Option<u32>,
    pub max_tasks: Option<u32>,
    pub seed: Option<u64>,
    pub show_status: bool,
    pub target_changeable: bool,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSettings {
    pub min_tasks: Option<u32>,
    pub max_tasks: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub seed: Option<u64>,
    #[serde(flatten)]
    pub flags: SessionFlags,
}

/// Defaults, then the settings file, then environment, then command line.
pub fn load_settings(overrides: &Overrides) -> anyhow::Result<Settings> {
    let file = match &overrides.config {
        Some(path) => read_settings_file(path)?
            .with_context(|| format!("settings file '{}' not found", path.display()))?,
        None => read_settings_file(Path::new(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
    };

    let settings = merge_settings(file, |key| std::env::var(key).ok(), overrides)?;
    debug!(?settings, "settings loaded");
    Ok(settings)
}

/// Returns `Ok(None)` when the file does not exist.
pub fn read_settings_file(path: &Path) -> Result<Option<FileSettings>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(invalid_file(path, err)),
    };

    toml::from_str(&raw)
        .map(Some)
        .map_err(|err| invalid_file(path, err))
}

pub fn merge_settings<E>(
    file: FileSettings,
    env: E,
    overrides: &Overrides,
) -> Result<Settings, ConfigError>
where
    E: Fn(&str) -> Option<String>,
{
    let mut log_file = file.log_file;
    let mut min_tasks = file.min_tasks;
    let mut max_tasks = file.max_tasks;

    if let Some(v) = env("TRACKER_LOG_FILE") {
        log_file = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__LOG_FILE") {
        log_file = Some(PathBuf::from(v));
    }
    if let Some(v) = env_u32(&env, "APP__MIN_TASKS") {
        min_tasks = Some(v);
    }
    if let Some(v) = env_u32(&env, "APP__MAX_TASKS") {
        max_tasks = Some(v);
    }

    if let Some(v) = &overrides.log_file {
        log_file = Some(v.clone());
    }
    if let Some(v) = overrides.min_tasks {
        min_tasks = Some(v);
    }
    if let Some(v) = overrides.max_tasks {
        max_tasks = Some(v);
    }

    let bounds = TargetBounds::new(
        min_tasks.unwrap_or(MIN_TASKS),
        max_tasks.unwrap_or(MAX_TASKS),
    )?;

    Ok(Settings {
        log_file: log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        bounds,
        flags: SessionFlags {
            show_status: file.flags.show_status || overrides.show_status,
            target_changeable: file.flags.target_changeable || overrides.target_changeable,
        },
        seed: overrides.seed.or(file.seed),
    })
}

fn env_u32<E>(env: &E, key: &str) -> Option<u32>
where
    E: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse::<u32>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(key, value = %raw, error = %err, "ignoring non-numeric environment override");
            None
        }
    }
}

fn invalid_file(path: &Path, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidFile {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
