use serde::Serialize;
use tracing::{debug, info, warn};

use crate::model::task::{EditTarget, Task, TaskId};

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// Commit with an empty or whitespace-only buffer
    #[error("Task cannot be empty!")]
    EmptyText,
}

/// A user intent forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetBuffer(String),
    Commit,
    StartEdit(TaskId),
    CancelEdit,
    Delete(TaskId),
}

impl Intent {
    /// Short lowercase name used in logs and replay output
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetBuffer(_) => "set",
            Intent::Commit => "commit",
            Intent::StartEdit(_) => "edit",
            Intent::CancelEdit => "cancel",
            Intent::Delete(_) => "delete",
        }
    }
}

/// Snapshot of controller state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub tasks: Vec<Task>,
    pub buffer: String,
    pub edit_target: EditTarget,
}

/// Hands out decimal ids `"1"`, `"2"`, ... that never repeat within a list
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    /// Start after the largest numeric id already present in `tasks`.
    pub fn after(tasks: &[Task]) -> Self {
        let max = tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        // Past the top of the range, start over and let `fresh` skip taken ids
        IdGenerator {
            next: max.checked_add(1).unwrap_or(1),
        }
    }

    /// Next id not already used by `tasks`
    pub fn fresh(&mut self, tasks: &[Task]) -> TaskId {
        loop {
            let id = self.next.to_string();
            self.next = self.next.checked_add(1).unwrap_or(1);
            if !tasks.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}

/// Owns the task list, the shared edit buffer and the edit target.
///
/// All operations are synchronous and total except [`commit`], which
/// rejects an empty buffer without touching state. Operations on unknown
/// ids are no-ops.
///
/// [`commit`]: TaskListController::commit
#[derive(Debug, Clone)]
pub struct TaskListController {
    tasks: Vec<Task>,
    buffer: String,
    edit_target: EditTarget,
    ids: IdGenerator,
    trim_on_commit: bool,
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListController {
    pub fn new() -> Self {
        TaskListController {
            tasks: Vec::new(),
            buffer: String::new(),
            edit_target: EditTarget::Idle,
            ids: IdGenerator::default(),
            trim_on_commit: true,
        }
    }

    /// Seed the list with existing tasks. Later tasks with a duplicate id
    /// are dropped so ids stay unique.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if unique.iter().any(|t| t.id == task.id) {
                warn!(id = %task.id, "dropping task with duplicate id");
                continue;
            }
            unique.push(task);
        }
        let ids = IdGenerator::after(&unique);
        TaskListController {
            tasks: unique,
            ids,
            ..Self::new()
        }
    }

    /// Whether commit stores the trimmed buffer (default) or the raw one
    pub fn trim_on_commit(mut self, trim: bool) -> Self {
        self.trim_on_commit = trim;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            tasks: self.tasks.clone(),
            buffer: self.buffer.clone(),
            edit_target: self.edit_target.clone(),
        }
    }

    /// Apply one intent
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), TaskError> {
        debug!(intent = intent.name(), "dispatch");
        match intent {
            Intent::SetBuffer(text) => self.set_buffer(text),
            Intent::Commit => return self.commit(),
            Intent::StartEdit(id) => self.start_edit(&id),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Delete(id) => self.delete(&id),
        }
        Ok(())
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Add a new task (idle) or save the edited one (editing).
    pub fn commit(&mut self) -> Result<(), TaskError> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            warn!("rejected commit of empty task");
            return Err(TaskError::EmptyText);
        }
        let text = if self.trim_on_commit {
            trimmed.to_string()
        } else {
            self.buffer.clone()
        };

        match std::mem::take(&mut self.edit_target) {
            EditTarget::Editing(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.text = text;
                    info!(id = %id, "saved task");
                }
            }
            EditTarget::Idle => {
                let id = self.ids.fresh(&self.tasks);
                info!(id = %id, "added task");
                self.tasks.push(Task::new(id, text));
            }
        }
        self.buffer.clear();
        Ok(())
    }

    /// Load a task's text into the buffer and make it the edit target.
    /// Switching away from another edit discards its unsaved buffer.
    pub fn start_edit(&mut self, id: &str) {
        let Some(text) = self.find_task(id).map(|t| t.text.clone()) else {
            debug!(id, "start_edit on unknown id ignored");
            return;
        };
        if let EditTarget::Editing(previous) = &self.edit_target
            && previous != id
        {
            debug!(from = %previous, to = id, "switching edit target");
        }
        self.buffer = text;
        self.edit_target = EditTarget::Editing(id.to_string());
    }

    pub fn cancel_edit(&mut self) {
        self.edit_target = EditTarget::Idle;
        self.buffer.clear();
    }

    /// Remove a task. Deleting the edit target also cancels the edit.
    pub fn delete(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            info!(id, "deleted task");
        }
        if self.edit_target.is_editing_task(id) {
            self.cancel_edit();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
