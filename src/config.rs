// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! The file lives under the platform config directory (`galerie/settings.toml`
//! via the `dirs` crate) and can be relocated with the `GALERIE_CONFIG_DIR`
//! environment variable or, for tests, an explicit base directory.
//!
//! A missing file is not an error: defaults apply and the file is written on
//! first run so the available options are discoverable. A malformed file also
//! falls back to defaults, with a warning returned to the caller for logging.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
const APP_DIR_NAME: &str = "Galerie";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "GALERIE_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// UI language code (e.g., "en-US", "fr"). Resolved from the OS locale
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Status tag shown at startup when the CLI does not pass `--status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_status: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_status: Some(crate::artwork::DEFAULT_STATUS_TAG.to_string()),
        }
    }
}

/// Returns the config directory, honoring the test override and the
/// environment variable before falling back to the platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(base) = base_dir {
        return Some(base);
    }
    if let Ok(dir) = env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|path| path.join(APP_DIR_NAME))
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Reads the preferences from their regular location.
///
/// Returns the config plus an optional warning. A load failure yields the
/// defaults and the warning text for the caller to log.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], from an explicit base directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Parses one specific preferences file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes the preferences to their regular location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Same as [`save`], into an explicit base directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Serializes the preferences into one specific file, creating parent
/// directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Writes the default file on first run so the options are discoverable.
/// Existing files are left untouched.
pub fn init_if_missing(config: &Config) -> Result<()> {
    if let Some(path) = config_path_with_override(None) {
        if !path.exists() {
            return save_to_path(config, &path);
        }
    }
    Ok(())
}
