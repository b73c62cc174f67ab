use async_trait::async_trait;

use crate::entities::Event;
use crate::value_objects::EventId;

/// Persistence gateway for events.
///
/// `create` assigns a fresh positive id to the event and ids to any unsaved
/// tasks and media, so the caller observes them right away. `update` does
/// the same for tasks and media added since and fails for unknown events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &mut Event) -> anyhow::Result<EventId>;
    async fn update(&self, event: &mut Event) -> anyhow::Result<()>;
    async fn get(&self, id: EventId) -> anyhow::Result<Option<Event>>;
    /// Most recently created first.
    async fn get_newest(&self, limit: usize) -> anyhow::Result<Vec<Event>>;
}
