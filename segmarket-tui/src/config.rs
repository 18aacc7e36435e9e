use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Base URL of the Segmarket API, used for authentication.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL the events query goes through, usually the local `segmarket-proxy`.
    /// The request path is `<events_url>/api/public/events/getEvents`.
    #[serde(default = "default_events_url")]
    pub events_url: String,
}

fn default_api_url() -> String {
    "https://segmarket-dash-sandbox-api.azuremicroservices.io".to_string()
}

fn default_events_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            events_url: default_events_url(),
        }
    }
}

impl DashConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(crate::session_store::root_path()?.join("config.toml"))
    }

    /// Load config from disk, then apply `SEGMARKET_API_URL` / `SEGMARKET_EVENTS_URL`.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("SEGMARKET_API_URL").filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(url) = lookup("SEGMARKET_EVENTS_URL").filter(|v| !v.is_empty()) {
            self.events_url = url;
        }
        self
    }

    /// Write the default config if none exists yet and return its path.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config = DashConfig::from_toml(r#"api_url = "https://api.example""#).unwrap();

        assert_eq!(config.api_url, "https://api.example");
        assert_eq!(config.events_url, default_events_url());
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let config = DashConfig::default().with_env_overrides(|key| match key {
            "SEGMARKET_EVENTS_URL" => Some("http://127.0.0.1:4000".to_string()),
            "SEGMARKET_API_URL" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.events_url, "http://127.0.0.1:4000");
        assert_eq!(config.api_url, default_api_url());
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let raw = toml::to_string_pretty(&DashConfig::default()).unwrap();
        assert_eq!(DashConfig::from_toml(&raw).unwrap(), DashConfig::default());
    }
}
