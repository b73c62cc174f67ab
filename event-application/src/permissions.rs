// Permission descriptors
// The routing layer checks these before invoking an operation; nothing in
// this crate enforces them.

use serde::Serialize;

pub const MODULE_NAME: &str = "EventManagement";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Read,
    Create,
    Modify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionRequirement {
    pub module: &'static str,
    pub kind: PermissionKind,
    pub state: PermissionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOperation {
    List,
    Create,
    Profile,
    AddTask,
    UpdateTask,
    AddMedia,
}

impl EventOperation {
    pub fn required_permission(&self) -> PermissionRequirement {
        let kind = match self {
            EventOperation::List | EventOperation::Profile => PermissionKind::Read,
            EventOperation::Create => PermissionKind::Create,
            EventOperation::AddTask | EventOperation::UpdateTask | EventOperation::AddMedia => {
                PermissionKind::Modify
            }
        };
        PermissionRequirement {
            module: MODULE_NAME,
            kind,
            state: PermissionState::Event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_map_to_read_and_create() {
        assert_eq!(
            EventOperation::List.required_permission().kind,
            PermissionKind::Read
        );
        assert_eq!(
            EventOperation::Profile.required_permission().kind,
            PermissionKind::Read
        );
        assert_eq!(
            EventOperation::Create.required_permission().kind,
            PermissionKind::Create
        );
        let requirement = EventOperation::AddMedia.required_permission();
        assert_eq!(requirement.module, "EventManagement");
        assert_eq!(requirement.state, PermissionState::Event);
    }
}
