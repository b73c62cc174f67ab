use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use event_domain::{RuntimeConfig, StorageKind};

use crate::config::validation::validate_newest_limit;

pub const CONFIG_ENV: &str = "EVENTS_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageKind,
    pub data_path: String,
    pub newest_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::File,
            data_path: "./events.json".to_string(),
            newest_limit: 10,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.data_path = self.data_path.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_path = resolve_path(base, &self.data_path);
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage == StorageKind::File && self.data_path.is_empty() {
            return Err(anyhow!("data_path must not be empty for file storage"));
        }
        validate_newest_limit(self.newest_limit)?;
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            storage: self.storage,
            data_path: self.data_path.clone(),
            newest_limit: self.newest_limit,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("EVENTS_STORAGE") {
            match value.trim().to_lowercase().as_str() {
                "file" => self.storage = StorageKind::File,
                "memory" => self.storage = StorageKind::Memory,
                other => warn!("ignoring unknown EVENTS_STORAGE '{}'", other),
            }
        }
        if let Ok(value) = env::var("EVENTS_DATA_PATH") {
            self.data_path = value;
        }
        if let Ok(value) = env::var("EVENTS_NEWEST_LIMIT") {
            match value.trim().parse() {
                Ok(limit) => self.newest_limit = limit,
                Err(_) => warn!("ignoring invalid EVENTS_NEWEST_LIMIT '{}'", value),
            }
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
