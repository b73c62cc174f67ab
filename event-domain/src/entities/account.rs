// Account reference
// `Account::null()` stands in wherever no creator is known, so readers
// never branch on a missing account.

use serde::{Deserialize, Serialize};

use crate::value_objects::AccountId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(default)]
    pub name: String,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    /// Id-only reference to an account whose profile has not been loaded.
    pub fn reference(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        !self.id.is_assigned()
    }

    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            self.name.clone()
        } else if self.is_null() {
            "unknown".to_string()
        } else {
            format!("account #{}", self.id)
        }
    }
}
