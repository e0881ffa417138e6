use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dadjoke_engine::FetchSettings;
use serde::Deserialize;

const SETTINGS_FILENAME: &str = "dadjoke.ron";
pub const DEFAULT_ADDRESS: &str = "https://icanhazdadjoke.com/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub address: String,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub log_to_file: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            log_to_file: false,
        }
    }
}

impl AppSettings {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            ..FetchSettings::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads `dadjoke.ron` from `dir`. A missing file yields the defaults.
pub fn load_settings(dir: &Path) -> Result<AppSettings, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppSettings::default());
        }
        Err(source) => return Err(SettingsError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|source| SettingsError::Parse { path, source })
}
