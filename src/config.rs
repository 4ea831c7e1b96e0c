use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sink::LogPaths;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logs: LogsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_secs: u64,
    pub default_sort: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_secs: 5,
            default_sort: "none".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    pub directory: PathBuf,
    pub text_file: String,
    pub csv_file: String,
    pub json_file: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        LogsConfig {
            directory: PathBuf::from("."),
            text_file: "monitor_log.txt".to_string(),
            csv_file: "monitor_log.csv".to_string(),
            json_file: "monitor_log.json".to_string(),
        }
    }
}

impl LogsConfig {
    pub fn paths(&self) -> LogPaths {
        LogPaths {
            text: self.directory.join(&self.text_file),
            csv: self.directory.join(&self.csv_file),
            json: self.directory.join(&self.json_file),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("proclog").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
