use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf};
use tracing::debug;

/// Environment variable that overrides the configured FCS access key.
pub const ACCESS_KEY_ENV: &str = "HELPKIT_FCSAPI_KEY";

#[derive(Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FcsApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub access_key: String,
}

impl fmt::Debug for FcsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FcsApiConfig")
            .field("base_url", &self.base_url)
            .field("access_key", &"[hidden]")
            .finish()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub fcsapi: FcsApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Loads the default config file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_or_default(&config_path)
    }

    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            debug!("No config at {}, using defaults", path.as_ref().display());
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "helpkit", "helpkit")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// FCS settings with the access key taken from `key_override` when set.
    pub fn fcsapi_with_key_override(&self, key_override: Option<String>) -> FcsApiConfig {
        let mut fcsapi = self.providers.fcsapi.clone();
        if let Some(key) = key_override {
            debug!("Using access key from {}", ACCESS_KEY_ENV);
            fcsapi.access_key = key;
        }
        fcsapi
    }

    /// FCS settings, honouring the access key environment override.
    pub fn fcsapi(&self) -> FcsApiConfig {
        self.fcsapi_with_key_override(std::env::var(ACCESS_KEY_ENV).ok())
    }
}
