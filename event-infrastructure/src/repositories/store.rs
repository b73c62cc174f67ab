// Event table shared by the repository adapters

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use event_domain::{Event, EventId, MediaId, TaskId};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct EventStore {
    #[serde(default)]
    next_event_id: u64,
    #[serde(default)]
    next_task_id: u64,
    #[serde(default)]
    next_media_id: u64,
    #[serde(default)]
    events: Vec<Event>,
}

impl EventStore {
    pub(crate) fn insert(&mut self, event: &mut Event) -> EventId {
        self.next_event_id += 1;
        let id = EventId(self.next_event_id);
        event.assign_id(id);
        self.assign_children(event);
        self.events.push(event.clone());
        id
    }

    pub(crate) fn replace(&mut self, event: &mut Event) -> Result<()> {
        let index = self
            .events
            .iter()
            .position(|stored| stored.id() == event.id())
            .ok_or_else(|| anyhow!("event {} does not exist", event.id()))?;
        self.assign_children(event);
        self.events[index] = event.clone();
        Ok(())
    }

    pub(crate) fn find(&self, id: EventId) -> Option<Event> {
        self.events.iter().find(|event| event.id() == id).cloned()
    }

    /// Most recently created first; ids break ties.
    pub(crate) fn newest(&self, limit: usize) -> Vec<Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        events.into_iter().take(limit).cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    fn assign_children(&mut self, event: &mut Event) {
        let max_task = event.tasks().iter().map(|task| task.id.0).max().unwrap_or(0);
        self.next_task_id = self.next_task_id.max(max_task);
        let max_media = event.media().iter().map(|media| media.id.0).max().unwrap_or(0);
        self.next_media_id = self.next_media_id.max(max_media);

        let next_task_id = &mut self.next_task_id;
        event.assign_task_ids(|| {
            *next_task_id += 1;
            TaskId(*next_task_id)
        });
        let next_media_id = &mut self.next_media_id;
        event.assign_media_ids(|| {
            *next_media_id += 1;
            MediaId(*next_media_id)
        });
    }
}
