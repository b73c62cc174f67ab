use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use event_application::AppState;
use event_domain::{EventRepository, StorageKind};
use event_infrastructure::{AppConfig, InMemoryEventRepository, JsonFileEventRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let runtime_config = config.to_runtime_config();
        let event_repo: Arc<dyn EventRepository> = match runtime_config.storage {
            StorageKind::File => {
                info!(path = %runtime_config.data_path, "using json file storage");
                Arc::new(JsonFileEventRepository::new(&runtime_config.data_path))
            }
            StorageKind::Memory => {
                warn!("memory storage does not persist between runs");
                Arc::new(InMemoryEventRepository::new())
            }
        };

        let state = AppState {
            config: runtime_config,
            event_repo,
        };
        Self { state }
    }
}
