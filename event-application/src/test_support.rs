use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::AppState;
use event_domain::{
    EventRepository, Event, EventId, MediaId, RuntimeConfig, StorageKind, TaskId,
};

#[derive(Default)]
struct Store {
    events: Vec<Event>,
    next_id: u64,
}

impl Store {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn assign_children(&mut self, event: &mut Event) {
        event.assign_task_ids(|| TaskId(self.next()));
        event.assign_media_ids(|| MediaId(self.next()));
    }
}

#[derive(Default)]
pub struct FakeEventRepository {
    store: Mutex<Store>,
}

#[async_trait]
impl EventRepository for FakeEventRepository {
    async fn create(&self, event: &mut Event) -> anyhow::Result<EventId> {
        let mut store = self.store.lock().await;
        let id = EventId(store.next());
        event.assign_id(id);
        store.assign_children(event);
        store.events.push(event.clone());
        Ok(id)
    }

    async fn update(&self, event: &mut Event) -> anyhow::Result<()> {
        let mut store = self.store.lock().await;
        let index = store
            .events
            .iter()
            .position(|stored| stored.id() == event.id())
            .ok_or_else(|| anyhow!("unknown event {}", event.id()))?;
        store.assign_children(event);
        store.events[index] = event.clone();
        Ok(())
    }

    async fn get(&self, id: EventId) -> anyhow::Result<Option<Event>> {
        let store = self.store.lock().await;
        Ok(store.events.iter().find(|event| event.id() == id).cloned())
    }

    async fn get_newest(&self, limit: usize) -> anyhow::Result<Vec<Event>> {
        let store = self.store.lock().await;
        Ok(store.events.iter().rev().take(limit).cloned().collect())
    }
}

pub fn state_with_memory_repo() -> AppState {
    AppState {
        config: RuntimeConfig {
            storage: StorageKind::Memory,
            data_path: String::new(),
            newest_limit: 10,
        },
        event_repo: Arc::new(FakeEventRepository::default()),
    }
}
