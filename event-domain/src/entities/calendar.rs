// Calendar entity
// Every event owns exactly one calendar, created empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::CalendarId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: CalendarId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Calendar {
    pub fn new() -> Self {
        Self {
            id: CalendarId::UNASSIGNED,
            name: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
