use crate::model::MAX_VOLUME;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "termplay";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Player binary, looked up on `PATH`.
    pub player: String,
    pub player_args: Vec<String>,
    /// Argument carrying the volume; `{volume}` is replaced by 0-100.
    /// An empty string passes no volume at all.
    pub volume_arg: String,
    pub initial_volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: String::from("mpv"),
            player_args: Vec::new(),
            volume_arg: String::from("--volume={volume}"),
            initial_volume: MAX_VOLUME,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.player.trim().is_empty() {
            bail!("player cannot be empty");
        }
        if self.initial_volume > MAX_VOLUME {
            bail!(
                "initial_volume must be between 0 and {MAX_VOLUME}, got {}",
                self.initial_volume
            );
        }
        Ok(())
    }
}

pub fn config_root() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var("TERMPLAY_CONFIG_DIR") {
        return Ok(PathBuf::from(override_dir));
    }

    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .context("neither HOME nor USERPROFILE is set")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR))
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(config_root()?.join(SETTINGS_FILE))
}

pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings file {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(settings)
}
