use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable holding the remote store endpoint URL.
pub const STORE_URL_VAR: &str = "HABITRACK_STORE_URL";
/// Environment variable holding the remote store access credential.
pub const STORE_KEY_VAR: &str = "HABITRACK_STORE_KEY";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub table: String,
    #[serde(default = "default_days_to_show")]
    pub days_to_show: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,

    /// Endpoint override from the command line; never persisted.
    #[serde(skip)]
    pub store_url: Option<String>,
}

fn default_days_to_show() -> usize {
    14
}
fn default_chart_width() -> usize {
    40
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: "events".to_string(),
            days_to_show: default_days_to_show(),
            chart_width: default_chart_width(),
            separator_char: default_separator_char(),
            store_url: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("habitrack")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".habitrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("habitrack.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }

    /// Resolve the remote store endpoint: CLI override first, then the
    /// environment. Missing values abort the command.
    pub fn resolve_store_url(&self) -> AppResult<String> {
        if let Some(url) = &self.store_url {
            return Ok(url.clone());
        }
        env::var(STORE_URL_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", STORE_URL_VAR)))
    }

    /// Resolve the access credential from the environment.
    pub fn resolve_store_key(&self) -> AppResult<String> {
        env::var(STORE_KEY_VAR)
            .map_err(|_| AppError::Config(format!("{} is not set", STORE_KEY_VAR)))
    }

    /// Check configuration fields and the store environment.
    /// Returns the list of problems found (empty = all good).
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.table.trim().is_empty() {
            problems.push("table: must not be empty".to_string());
        }
        if self.days_to_show == 0 {
            problems.push("days_to_show: must be at least 1".to_string());
        }
        if self.chart_width == 0 {
            problems.push("chart_width: must be at least 1".to_string());
        }
        if self.store_url.is_none() && env::var(STORE_URL_VAR).is_err() {
            problems.push(format!("{}: not set", STORE_URL_VAR));
        }
        if env::var(STORE_KEY_VAR).is_err() {
            problems.push(format!("{}: not set", STORE_KEY_VAR));
        }

        problems
    }
}
