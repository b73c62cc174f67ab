use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use event_domain::{Event, Media, Task};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: Option<i64>,
    #[serde(default)]
    pub progress_type: Option<i64>,
    #[serde(default)]
    pub progress: Option<i32>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub costs: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub earnings: Option<String>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatusUpdate {
    pub task_id: u64,
    pub status: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewMediaRequest {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_by: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewestQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    pub event_type: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub progress: i32,
    pub progress_type: String,
    pub effective_progress: i32,
    pub task_count: usize,
    pub created_at: DateTime<Utc>,
}

impl EventSummary {
    pub fn from_event(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            id: event.id().0,
            name: event.name.clone(),
            event_type: event.event_type().as_str().to_string(),
            start: event.start,
            end: event.end,
            progress: event.progress,
            progress_type: event.progress_type().as_str().to_string(),
            effective_progress: event.effective_progress(now),
            task_count: event.count_tasks(),
            created_at: event.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub created_by: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            title: task.title.clone(),
            status: task.status.as_str().to_string(),
            created_by: task.created_by.display_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaView {
    pub id: u64,
    pub name: String,
    pub path: String,
    pub extension: String,
    pub size: u64,
}

impl From<&Media> for MediaView {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id.0,
            name: media.name.clone(),
            path: media.path.clone(),
            extension: media.extension.clone(),
            size: media.size,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventProfile {
    #[serde(flatten)]
    pub summary: EventSummary,
    pub description: String,
    pub costs: String,
    pub budget: String,
    pub earnings: String,
    pub created_by: String,
    pub tasks: Vec<TaskView>,
    pub media: Vec<MediaView>,
}

impl EventProfile {
    pub fn from_event(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            summary: EventSummary::from_event(event, now),
            description: event.description.clone(),
            costs: event.costs.to_string(),
            budget: event.budget.to_string(),
            earnings: event.earnings.to_string(),
            created_by: event.created_by.display_name(),
            tasks: event.tasks().iter().map(TaskView::from).collect(),
            media: event.media().iter().map(MediaView::from).collect(),
        }
    }
}
