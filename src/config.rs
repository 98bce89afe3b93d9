//! User configuration: built-in defaults + optional TOML file.
//!
//! - `Settings::default()` → game budget 1..=100 in 10 attempts, colour on
//! - `Settings::from_toml_file(path)` → explicit file, errors are fatal
//! - `Settings::load(cli_path)` → `--config` if given, else ~/.arithkit/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::game::GameSettings;
use crate::debug_log;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        settings.game.validate()?;
        Ok(settings)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must load; the default path falls back to built-ins.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            debug_log!("loading config from {}", p.display());
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(s) => {
                        debug_log!("loaded config from {}", p.display());
                        return Ok(s);
                    }
                    Err(e) => eprintln!(
                        "{} failed loading {} ({e:#}), using defaults",
                        "warn:".yellow().bold(),
                        p.display()
                    ),
                }
            }
        }
        debug_log!("using built-in config");
        Ok(Self::default())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// ~/.arithkit/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".arithkit").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
