use std::sync::Arc;

use event_domain::ports::EventRepository;
use event_domain::RuntimeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
}
