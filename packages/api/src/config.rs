use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Load `.env` from the working directory when there is one.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("config.load_dotenv: loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("config.load_dotenv: {}", e),
    }
}

/// Server-side settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    /// Base URL of the external progress backend, without trailing slash.
    pub backend_url: Option<String>,
    /// JSON file served by `/api/sync` instead of the built-in content.
    pub sync_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            mode: AppMode::parse(&lookup("APP_MODE").unwrap_or_default()),
            backend_url: non_empty("BACKEND_URL").map(|url| url.trim_end_matches('/').to_string()),
            sync_file: non_empty("LINGUAROMANA_SYNC_FILE").map(PathBuf::from),
        }
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            backend_url: self.backend_url.clone(),
            local_mode: self.mode == AppMode::Local,
        }
    }
}

/// Settings the browser needs, served by `GET /api/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub backend_url: Option<String>,
    #[serde(default)]
    pub local_mode: bool,
}
