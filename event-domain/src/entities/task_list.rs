// Ordered task collection keyed by identity or insertion position

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::value_objects::TaskId;

/// Key of a task inside an event.
///
/// Persisted tasks live under their own id. Tasks without an id get a
/// positional key from a separate counter, so the two keyspaces never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    Id(TaskId),
    Position(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    entries: IndexMap<TaskKey, Task>,
    next_position: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts by id, or appends under a fresh positional key when the task
    /// has no id. Replacing keeps the original insertion slot.
    pub fn insert(&mut self, task: Task) -> TaskKey {
        let key = if task.id.is_assigned() {
            TaskKey::Id(task.id)
        } else {
            let key = TaskKey::Position(self.next_position);
            self.next_position += 1;
            key
        };
        self.entries.insert(key, task);
        key
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        if !id.is_assigned() {
            return false;
        }
        self.entries.shift_remove(&TaskKey::Id(id)).is_some()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        if !id.is_assigned() {
            return None;
        }
        self.entries.get(&TaskKey::Id(id))
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        if !id.is_assigned() {
            return None;
        }
        self.entries.get_mut(&TaskKey::Id(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.entries.values()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&TaskKey, &Task)> {
        self.entries.iter()
    }

    pub fn completed(&self) -> usize {
        self.entries.values().filter(|task| task.is_completed()).count()
    }

    /// Gives every positional task an id from `next`, keeping order.
    /// Ids already held by a task in the list are skipped.
    pub fn assign_ids(&mut self, mut next: impl FnMut() -> TaskId) {
        if !self
            .entries
            .keys()
            .any(|key| matches!(key, TaskKey::Position(_)))
        {
            return;
        }
        let mut taken: HashSet<TaskId> = self
            .entries
            .keys()
            .filter_map(|key| match key {
                TaskKey::Id(id) => Some(*id),
                TaskKey::Position(_) => None,
            })
            .collect();
        let entries = std::mem::take(&mut self.entries);
        for (key, mut task) in entries {
            let key = match key {
                TaskKey::Id(id) => TaskKey::Id(id),
                TaskKey::Position(_) => {
                    let mut id = next();
                    while taken.contains(&id) {
                        id = next();
                    }
                    taken.insert(id);
                    task.id = id;
                    TaskKey::Id(id)
                }
            };
            self.entries.insert(key, task);
        }
    }
}

impl Serialize for TaskList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for task in self.entries.values() {
            seq.serialize_element(task)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tasks = Vec::<Task>::deserialize(deserializer)?;
        let mut list = TaskList::new();
        for task in tasks {
            list.insert(task);
        }
        Ok(list)
    }
}
