// Event type value object
// Integer codes are the persisted representation and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum EventType {
    #[default]
    Default,
    Course,
    Event,
    Fair,
    Congress,
    Demo,
    Conference,
    Seminar,
    Meeting,
    Tradeshow,
    Launch,
    Celebration,
}

impl EventType {
    pub const ALL: [EventType; 12] = [
        EventType::Default,
        EventType::Course,
        EventType::Event,
        EventType::Fair,
        EventType::Congress,
        EventType::Demo,
        EventType::Conference,
        EventType::Seminar,
        EventType::Meeting,
        EventType::Tradeshow,
        EventType::Launch,
        EventType::Celebration,
    ];

    pub fn is_valid_value(value: i64) -> bool {
        Self::try_from(value).is_ok()
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            EventType::Default => 0,
            EventType::Course => 1,
            EventType::Event => 2,
            EventType::Fair => 3,
            EventType::Congress => 4,
            EventType::Demo => 5,
            EventType::Conference => 6,
            EventType::Seminar => 7,
            EventType::Meeting => 8,
            EventType::Tradeshow => 9,
            EventType::Launch => 10,
            EventType::Celebration => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Default => "DEFAULT",
            EventType::Course => "COURSE",
            EventType::Event => "EVENT",
            EventType::Fair => "FAIR",
            EventType::Congress => "CONGRESS",
            EventType::Demo => "DEMO",
            EventType::Conference => "CONFERENCE",
            EventType::Seminar => "SEMINAR",
            EventType::Meeting => "MEETING",
            EventType::Tradeshow => "TRADESHOW",
            EventType::Launch => "LAUNCH",
            EventType::Celebration => "CELEBRATION",
        }
    }
}

impl TryFrom<i64> for EventType {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(DomainError::InvalidEnumValue {
                kind: "event type",
                value,
            })
    }
}

impl From<EventType> for i64 {
    fn from(value: EventType) -> Self {
        value.as_i64()
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::try_from(code);
        }
        let upper = trimmed.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| DomainError::UnknownEnumName {
                kind: "event type",
                name: trimmed.to_string(),
            })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
