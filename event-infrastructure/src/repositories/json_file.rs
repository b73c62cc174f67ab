use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use event_domain::{Event, EventId, EventRepository};

use super::store::EventStore;

/// Event storage backed by a single JSON document.
///
/// Every call reads the file; writes hold the lock from read to write so ids
/// are handed out once per process.
pub struct JsonFileEventRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileEventRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> anyhow::Result<EventStore> {
        if !self.path.exists() {
            return Ok(EventStore::default());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(EventStore::default());
        }
        let store: EventStore = serde_json::from_str(&content)?;
        Ok(store)
    }

    async fn save(&self, store: &EventStore) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), events = store.len(), "event store written");
        Ok(())
    }
}

#[async_trait]
impl EventRepository for JsonFileEventRepository {
    async fn create(&self, event: &mut Event) -> anyhow::Result<EventId> {
        let _guard = self.lock.lock().await;
        let mut store = self.load().await?;
        let mut staged = event.clone();
        let id = store.insert(&mut staged);
        self.save(&store).await?;
        *event = staged;
        info!(event_id = %id, path = %self.path.display(), "event created");
        Ok(id)
    }

    async fn update(&self, event: &mut Event) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        let mut store = self.load().await?;
        let mut staged = event.clone();
        store.replace(&mut staged)?;
        self.save(&store).await?;
        *event = staged;
        Ok(())
    }

    async fn get(&self, id: EventId) -> anyhow::Result<Option<Event>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.find(id))
    }

    async fn get_newest(&self, limit: usize) -> anyhow::Result<Vec<Event>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.newest(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fixtures::{
        assert_mixed_task_ids_survive, assert_round_trip, seminar_event,
    };
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileEventRepository::new(dir.path().join("events.json"));
        assert_round_trip(&repo).await;
    }

    #[tokio::test]
    async fn explicit_task_ids_are_not_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileEventRepository::new(dir.path().join("events.json"));
        assert_mixed_task_ids_survive(&repo).await;
    }

    #[tokio::test]
    async fn newest_reads_back_latest_creation_first() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileEventRepository::new(dir.path().join("events.json"));
        let at = |year| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();

        for (name, year) in [("Middle", 2021), ("Oldest", 2020), ("Newest", 2022)] {
            let mut event = Event::new_at(name, at(year));
            repo.create(&mut event).await.expect("create");
        }

        let newest = repo.get_newest(2).await.expect("newest");
        let names: Vec<_> = newest.iter().map(|event| event.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle"]);

        let all = repo.get_newest(10).await.expect("all");
        let names: Vec<_> = all.iter().map(|event| event.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn data_survives_a_new_repository_instance() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("events.json");

        let mut event = seminar_event();
        let id = JsonFileEventRepository::new(&path)
            .create(&mut event)
            .await
            .expect("create");

        let reopened = JsonFileEventRepository::new(&path);
        let loaded = reopened.get(id).await.expect("get").expect("event");
        assert_eq!(loaded.costs.amount(), Decimal::new(123, 2));
        assert_eq!(loaded.media().len(), 1);

        let mut second = Event::new("Second");
        let second_id = reopened.create(&mut second).await.expect("create second");
        assert_eq!(second_id, EventId(id.0 + 1));
    }

    #[tokio::test]
    async fn stored_document_uses_integer_codes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.json");
        let repo = JsonFileEventRepository::new(&path);
        let mut event = seminar_event();
        repo.create(&mut event).await.expect("create");

        let raw = std::fs::read_to_string(&path).expect("read store");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("json");
        let stored = &json["events"][0];
        assert_eq!(stored["type"], 7);
        assert_eq!(stored["progress_type"], 4);
        assert_eq!(stored["costs"], "1.23");
        assert_eq!(stored["tasks"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["next_event_id"], 1);
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileEventRepository::new(dir.path().join("absent.json"));
        assert!(repo.get(EventId(1)).await.expect("get").is_none());
        assert!(repo.get_newest(1).await.expect("newest").is_empty());
    }

    #[tokio::test]
    async fn failed_update_leaves_event_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonFileEventRepository::new(dir.path().join("events.json"));
        let mut event = seminar_event();
        event.assign_id(EventId(42));
        assert!(repo.update(&mut event).await.is_err());
        assert!(event.tasks().iter().all(|task| !task.id.is_assigned()));
    }
}
