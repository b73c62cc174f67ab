// Media entity attached to an event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Account;
use crate::value_objects::MediaId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub created_by: Account,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MediaId::UNASSIGNED,
            name: name.into(),
            description: String::new(),
            path: String::new(),
            size: 0,
            extension: String::new(),
            created_by: Account::null(),
            created_at: Utc::now(),
        }
    }

    /// Sets `path` and derives `extension` from it when none was given.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        if self.extension.is_empty() {
            if let Some((_, ext)) = self.path.rsplit_once('.') {
                if !ext.contains('/') {
                    self.extension = ext.to_lowercase();
                }
            }
        }
    }
}
