// Identifier value objects
// Zero marks a value that has not been persisted yet.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const UNASSIGNED: Self = Self(0);

            pub fn is_assigned(&self) -> bool {
                self.0 != 0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(EventId);
numeric_id!(TaskId);
numeric_id!(MediaId);
numeric_id!(AccountId);
numeric_id!(CalendarId);
