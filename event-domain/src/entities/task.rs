// Task entity attached to an event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Account;
use crate::value_objects::{TaskId, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub created_by: Account,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(title)
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: TaskId::UNASSIGNED,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Open,
            created_by: Account::null(),
            created_at: Utc::now(),
        }
    }
}
