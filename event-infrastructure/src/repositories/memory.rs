use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use event_domain::{Event, EventId, EventRepository};

use super::store::EventStore;

/// Process-local event storage.
#[derive(Default)]
pub struct InMemoryEventRepository {
    store: RwLock<EventStore>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: &mut Event) -> anyhow::Result<EventId> {
        let id = self.store.write().await.insert(event);
        debug!(event_id = %id, "event stored in memory");
        Ok(id)
    }

    async fn update(&self, event: &mut Event) -> anyhow::Result<()> {
        self.store.write().await.replace(event)
    }

    async fn get(&self, id: EventId) -> anyhow::Result<Option<Event>> {
        Ok(self.store.read().await.find(id))
    }

    async fn get_newest(&self, limit: usize) -> anyhow::Result<Vec<Event>> {
        Ok(self.store.read().await.newest(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::{
        assert_mixed_task_ids_survive, assert_round_trip, seminar_event,
    };
    use event_domain::{Task, TaskId};

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = InMemoryEventRepository::new();
        assert_round_trip(&repo).await;
    }

    #[tokio::test]
    async fn explicit_task_ids_are_not_overwritten() {
        let repo = InMemoryEventRepository::new();
        assert_mixed_task_ids_survive(&repo).await;
    }

    #[tokio::test]
    async fn newest_returns_latest_creation_first() {
        let repo = InMemoryEventRepository::new();
        assert!(repo.get_newest(1).await.expect("newest").is_empty());

        let mut older = seminar_event();
        repo.create(&mut older).await.expect("create older");
        let mut newer = Event::new("Newer");
        repo.create(&mut newer).await.expect("create newer");

        let newest = repo.get_newest(1).await.expect("newest");
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].name, "Newer");
        assert_eq!(repo.get_newest(10).await.expect("all").len(), 2);
    }

    #[tokio::test]
    async fn update_assigns_ids_to_new_tasks() {
        let repo = InMemoryEventRepository::new();
        let mut event = seminar_event();
        let id = repo.create(&mut event).await.expect("create");

        event.add_task(Task::new("late task"));
        repo.update(&mut event).await.expect("update");
        let new_id = event.tasks().iter().last().map(|t| t.id).expect("task");
        assert_eq!(new_id, TaskId(3));

        let loaded = repo.get(id).await.expect("get").expect("event");
        assert_eq!(loaded.count_tasks(), 3);
        assert_eq!(loaded.task(new_id).title, "late task");
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let repo = InMemoryEventRepository::new();
        assert!(repo.get(EventId(5)).await.expect("get").is_none());
        let mut transient = Event::new("never created");
        assert!(repo.update(&mut transient).await.is_err());
    }
}
