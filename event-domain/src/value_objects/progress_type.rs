// Progress type value object
// Selects how an event's completion percentage is derived.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ProgressType {
    #[default]
    Manual,
    Linear,
    Exponential,
    Log,
    Tasks,
}

impl ProgressType {
    pub const ALL: [ProgressType; 5] = [
        ProgressType::Manual,
        ProgressType::Linear,
        ProgressType::Exponential,
        ProgressType::Log,
        ProgressType::Tasks,
    ];

    pub fn is_valid_value(value: i64) -> bool {
        Self::try_from(value).is_ok()
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            ProgressType::Manual => 0,
            ProgressType::Linear => 1,
            ProgressType::Exponential => 2,
            ProgressType::Log => 3,
            ProgressType::Tasks => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressType::Manual => "MANUAL",
            ProgressType::Linear => "LINEAR",
            ProgressType::Exponential => "EXPONENTIAL",
            ProgressType::Log => "LOG",
            ProgressType::Tasks => "TASKS",
        }
    }
}

impl TryFrom<i64> for ProgressType {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProgressType::Manual),
            1 => Ok(ProgressType::Linear),
            2 => Ok(ProgressType::Exponential),
            3 => Ok(ProgressType::Log),
            4 => Ok(ProgressType::Tasks),
            _ => Err(DomainError::InvalidEnumValue {
                kind: "progress type",
                value,
            }),
        }
    }
}

impl From<ProgressType> for i64 {
    fn from(value: ProgressType) -> Self {
        value.as_i64()
    }
}

impl FromStr for ProgressType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::try_from(code);
        }
        match trimmed.to_uppercase().as_str() {
            "MANUAL" => Ok(ProgressType::Manual),
            "LINEAR" => Ok(ProgressType::Linear),
            "EXPONENTIAL" => Ok(ProgressType::Exponential),
            "LOG" => Ok(ProgressType::Log),
            "TASKS" => Ok(ProgressType::Tasks),
            _ => Err(DomainError::UnknownEnumName {
                kind: "progress type",
                name: trimmed.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProgressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
