//! Local and global default settings.
//!
//! Defaults live in a `tempo.json` file: the local copy in the current
//! working directory, the global one in the XDG config directory. The
//! local file wins over the global one at load time, and stored values
//! only fill in flags the user did not supply.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "tempo.json";
const XDG_PREFIX: &str = "tempo";

/// Stored default settings.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_only: Option<bool>,
}

/// Path of the local config file in the current working directory.
pub fn local_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("unable to determine the current directory")?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}

/// Path of the global config file, if one exists.
pub fn global_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(CONFIG_FILE_NAME)
}

/// Loads stored defaults. A missing file means empty defaults; an
/// unreadable one is reported and skipped rather than failing the run.
pub fn load() -> Defaults {
    match read_defaults() {
        Ok(defaults) => defaults,
        Err(err) => {
            warn!("ignoring stored defaults: {err:#}");
            Defaults::default()
        }
    }
}

fn read_defaults() -> Result<Defaults> {
    if let Ok(path) = local_path() {
        if path.exists() {
            debug!("loading local defaults from {}", path.display());
            return parse_file(&path);
        }
    }

    if let Some(path) = global_path() {
        debug!("loading global defaults from {}", path.display());
        return parse_file(&path);
    }

    Ok(Defaults::default())
}

fn parse_file(path: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("unable to parse config file {}", path.display()))
}

/// Saves defaults next to the current working directory.
pub fn save_local(defaults: &Defaults) -> Result<PathBuf> {
    let path = local_path()?;
    write_file(&path, defaults)?;
    Ok(path)
}

/// Saves defaults in the XDG config directory, creating it if needed.
pub fn save_global(defaults: &Defaults) -> Result<PathBuf> {
    let path = xdg::BaseDirectories::with_prefix(XDG_PREFIX)
        .place_config_file(CONFIG_FILE_NAME)
        .context("unable to prepare the global config directory")?;
    write_file(&path, defaults)?;
    Ok(path)
}

fn write_file(path: &Path, defaults: &Defaults) -> Result<()> {
    let content = serde_json::to_string_pretty(defaults).context("unable to encode defaults")?;
    fs::write(path, content)
        .with_context(|| format!("unable to write config file {}", path.display()))
}

/// Raw text of the local config file, if present. Used by `show`.
pub fn raw_local() -> Result<Option<String>> {
    let path = local_path()?;
    raw_file(Some(path))
}

/// Raw text of the global config file, if present. Used by `show`.
pub fn raw_global() -> Result<Option<String>> {
    raw_file(global_path())
}

fn raw_file(path: Option<PathBuf>) -> Result<Option<String>> {
    match path {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("unable to read config file {}", path.display()))?;
            Ok(Some(content))
        }
        _ => Ok(None),
    }
}

/// Deletes the local config file. Returns whether one existed.
pub fn clear_local() -> Result<bool> {
    remove(local_path().ok())
}

/// Deletes the global config file. Returns whether one existed.
pub fn clear_global() -> Result<bool> {
    remove(global_path())
}

fn remove(path: Option<PathBuf>) -> Result<bool> {
    match path {
        Some(path) if path.exists() => {
            fs::remove_file(&path)
                .with_context(|| format!("unable to remove config file {}", path.display()))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
