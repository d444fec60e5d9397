//! Connection settings: optional TOML file, then environment overrides.

use std::path::Path;
use std::time::Duration;

use panel_api::Client;
use serde::Deserialize;

use crate::error::PanelError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// API root, e.g. `https://panel.example.com/api`.
    pub base_url: String,
    /// Bearer token for authenticated endpoints.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PanelConfig {
    /// Reads `path` if given, then applies `PANEL_API_URL`, `PANEL_API_TOKEN`
    /// and `PANEL_TIMEOUT_SECS` from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, PanelError> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    PanelError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PanelError> {
        toml::from_str(content).map_err(|e| PanelError::Config(e.to_string()))
    }

    /// Applies overrides from `lookup`. Unparseable or empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PANEL_API_URL").filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(token) = lookup("PANEL_API_TOKEN").filter(|v| !v.trim().is_empty()) {
            self.token = Some(token.trim().to_string());
        }
        let timeout = lookup("PANEL_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok());
        if let Some(secs) = timeout {
            self.timeout_secs = secs;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn build_client(&self) -> Result<Client, PanelError> {
        let client = Client::with_timeout(&self.base_url, self.timeout())?;
        Ok(match &self.token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}
