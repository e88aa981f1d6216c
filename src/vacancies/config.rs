use crate::error::{Result, VacancyError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data/vacancies.json";
const DEFAULT_API_BASE_URL: &str = "https://api.hh.ru";
/// hh.ru area id for Russia.
const DEFAULT_AREA: u32 = 113;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for vacancies, stored in `config.json` in the config directory.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where saved vacancies live. Relative paths resolve against the working directory.
    pub data_file: PathBuf,

    /// Base URL of the hh.ru REST API
    pub api_base_url: String,

    /// Region filter sent with every search
    pub area: u32,

    /// Seconds to wait for the API before giving up
    pub request_timeout_secs: u64,

    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            area: DEFAULT_AREA,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("vacancies/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            VacancyError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
