// Event aggregate
// A course, fair, congress or similar happening with its schedule,
// financials, tasks, media and progress.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Account, Calendar, Media, Task, TaskList};
use crate::error::DomainError;
use crate::services::progress::{derive_progress, ProgressContext};
use crate::value_objects::{EventId, EventType, MediaId, Money, ProgressType, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    #[serde(rename = "type")]
    event_type: EventType,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub calendar: Calendar,
    pub costs: Money,
    pub budget: Money,
    pub earnings: Money,
    tasks: TaskList,
    media: Vec<Media>,
    /// Stored progress. Not range checked and never recomputed here.
    pub progress: i32,
    progress_type: ProgressType,
    created_at: DateTime<Utc>,
    pub created_by: Account,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_at(name, Utc::now())
    }

    /// Builds an event as if constructed at `now`: it starts then and ends
    /// one month later.
    pub fn new_at(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: EventId::UNASSIGNED,
            event_type: EventType::Default,
            start: now,
            end: now.checked_add_months(Months::new(1)).unwrap_or(now),
            name: name.into(),
            description: String::new(),
            calendar: Calendar::new(),
            costs: Money::zero(),
            budget: Money::zero(),
            earnings: Money::zero(),
            tasks: TaskList::new(),
            media: Vec::new(),
            progress: 0,
            progress_type: ProgressType::Manual,
            created_at: now,
            created_by: Account::null(),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    /// Called by persistence adapters once the event has been stored.
    pub fn assign_id(&mut self, id: EventId) {
        self.id = id;
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn set_type(&mut self, value: i64) -> Result<(), DomainError> {
        self.event_type = EventType::try_from(value)?;
        Ok(())
    }

    pub fn set_event_type(&mut self, value: EventType) {
        self.event_type = value;
    }

    pub fn progress_type(&self) -> ProgressType {
        self.progress_type
    }

    pub fn set_progress_type(&mut self, value: i64) -> Result<(), DomainError> {
        self.progress_type = ProgressType::try_from(value)?;
        Ok(())
    }

    pub fn set_progress_kind(&mut self, value: ProgressType) {
        self.progress_type = value;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(task);
    }

    pub fn remove_task(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id)
    }

    /// Returns the stored task, or a default task with id 0 when `id` is
    /// unknown.
    pub fn task(&self, id: TaskId) -> Task {
        self.tasks.get(id).cloned().unwrap_or_default()
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn find_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn count_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn assign_task_ids(&mut self, next: impl FnMut() -> TaskId) {
        self.tasks.assign_ids(next);
    }

    pub fn add_media(&mut self, media: Media) {
        self.media.push(media);
    }

    pub fn media(&self) -> &[Media] {
        &self.media
    }

    pub fn assign_media_ids(&mut self, mut next: impl FnMut() -> MediaId) {
        for media in self.media.iter_mut().filter(|m| !m.id.is_assigned()) {
            media.id = next();
        }
    }

    /// Progress as implied by the progress type at `now`. Manual events
    /// report the stored value.
    pub fn effective_progress(&self, now: DateTime<Utc>) -> i32 {
        let context = ProgressContext {
            start: self.start,
            end: self.end,
            now,
            tasks: &self.tasks,
        };
        derive_progress(self.progress_type, &context)
            .map(i32::from)
            .unwrap_or(self.progress)
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new("")
    }
}
