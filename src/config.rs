use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{debug, warn};

pub const API_URL_VAR: &str = "WOIYA_BACKEND_URL";
pub const DATA_DIR_VAR: &str = "WOIYA_DATA_DIR";
pub const TIMEOUT_VAR: &str = "WOIYA_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://localhost:8001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const TOKEN_DB_FILE_NAME: &str = "session.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the marketplace API, without trailing slash.
    pub api_url: String,
    /// Where the persisted session lives.
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the environment, falling back to defaults for anything unset or invalid.
    pub fn load() -> Self {
        Self {
            api_url: try_load(API_URL_VAR, DEFAULT_API_URL.to_string()),
            data_dir: var(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            request_timeout: Duration::from_secs(try_load(TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }

    pub fn token_db_path(&self) -> PathBuf {
        self.data_dir.join(TOKEN_DB_FILE_NAME)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(env::temp_dir)
        .join("woiya")
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        debug!("{key} not set");
    })
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = var(key) else {
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
