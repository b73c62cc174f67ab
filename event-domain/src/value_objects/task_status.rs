// Task status value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TaskStatus {
    #[default]
    Open,
    Working,
    Suspended,
    Canceled,
    Done,
}

impl TaskStatus {
    pub fn as_i64(&self) -> i64 {
        match self {
            TaskStatus::Open => 1,
            TaskStatus::Working => 2,
            TaskStatus::Suspended => 3,
            TaskStatus::Canceled => 4,
            TaskStatus::Done => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "OPEN",
            TaskStatus::Working => "WORKING",
            TaskStatus::Suspended => "SUSPENDED",
            TaskStatus::Canceled => "CANCELED",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl TryFrom<i64> for TaskStatus {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TaskStatus::Open),
            2 => Ok(TaskStatus::Working),
            3 => Ok(TaskStatus::Suspended),
            4 => Ok(TaskStatus::Canceled),
            5 => Ok(TaskStatus::Done),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "task status",
                value,
            }),
        }
    }
}

impl From<TaskStatus> for i64 {
    fn from(value: TaskStatus) -> Self {
        value.as_i64()
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::try_from(code);
        }
        match trimmed.to_uppercase().as_str() {
            "OPEN" => Ok(TaskStatus::Open),
            "WORKING" => Ok(TaskStatus::Working),
            "SUSPENDED" => Ok(TaskStatus::Suspended),
            "CANCELED" | "CANCELLED" => Ok(TaskStatus::Canceled),
            "DONE" => Ok(TaskStatus::Done),
            _ => Err(DomainError::UnknownEnumName {
                kind: "task status",
                name: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
