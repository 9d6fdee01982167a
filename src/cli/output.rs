use serde::Serialize;

use crate::model::task::{EditTarget, Task};
use crate::ops::task_ops::{Intent, TaskError, ViewState};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// One line of `replay` output: the intent applied and the resulting state
#[derive(Serialize)]
pub struct StepJson<'a> {
    pub intent: &'static str,
    pub tasks: &'a [Task],
    pub buffer: &'a str,
    pub edit_target: &'a EditTarget,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn step_to_json<'a>(
    intent: &Intent,
    view: &'a ViewState,
    result: &Result<(), TaskError>,
) -> StepJson<'a> {
    StepJson {
        intent: intent.name(),
        tasks: &view.tasks,
        buffer: &view.buffer,
        edit_target: &view.edit_target,
        error: result.as_ref().err().map(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_step_json_after_add() {
        let view = ViewState {
            tasks: vec![Task::new("1", "Buy milk")],
            buffer: String::new(),
            edit_target: EditTarget::Idle,
        };
        let json = serde_json::to_string(&step_to_json(&Intent::Commit, &view, &Ok(()))).unwrap();
        assert_snapshot!(json, @r#"{"intent":"commit","tasks":[{"id":"1","text":"Buy milk"}],"buffer":"","edit_target":null,"error":null}"#);
    }

    #[test]
    fn test_step_json_with_error() {
        let view = ViewState {
            tasks: vec![Task::new("1", "A")],
            buffer: "  ".into(),
            edit_target: EditTarget::Editing("1".into()),
        };
        let json = serde_json::to_string(&step_to_json(
            &Intent::Commit,
            &view,
            &Err(TaskError::EmptyText),
        ))
        .unwrap();
        assert_snapshot!(json, @r#"{"intent":"commit","tasks":[{"id":"1","text":"A"}],"buffer":"  ","edit_target":"1","error":"Task cannot be empty!"}"#);
    }
}
