use serde::{Deserialize, Serialize};

/// Opaque task identifier, unique within a running session
pub type TaskId = String;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task text, never empty after trimming
    pub text: String,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Which task, if any, the shared buffer is currently editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    /// Add mode: the buffer composes a new task
    #[default]
    Idle,
    /// The buffer holds the pending text for this task
    Editing(TaskId),
}

impl EditTarget {
    /// The id being edited, if any
    pub fn task_id(&self) -> Option<&str> {
        match self {
            EditTarget::Idle => None,
            EditTarget::Editing(id) => Some(id.as_str()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }

    /// Whether `id` is the task currently being edited
    pub fn is_editing_task(&self, id: &str) -> bool {
        self.task_id() == Some(id)
    }
}

/// Edit targets travel over the wire as `null` or the edited id.
impl Serialize for EditTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.task_id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EditTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<TaskId>::deserialize(deserializer)? {
            Some(id) => EditTarget::Editing(id),
            None => EditTarget::Idle,
        })
    }
}
