use crate::ops::task_ops::Intent;
use crate::tui::app::App;

/// Enter: add a task, or save the one being edited.
pub(super) fn commit(app: &mut App) {
    app.apply(Intent::Commit);
}

/// Esc: leave edit mode without saving.
pub(super) fn cancel_edit(app: &mut App) {
    if app.is_editing() {
        app.apply(Intent::CancelEdit);
    }
}

/// Edit the selected task. Only offered while nothing else is being edited.
pub(super) fn start_edit_selected(app: &mut App) {
    if app.is_editing() {
        return;
    }
    if let Some(id) = app.selected_task().map(|t| t.id.clone()) {
        app.apply(Intent::StartEdit(id));
    }
}

/// Delete the selected task. The row being edited offers Save instead.
pub(super) fn delete_selected(app: &mut App) {
    let Some(id) = app.selected_task().map(|t| t.id.clone()) else {
        return;
    };
    if app.tasks.edit_target().is_editing_task(&id) {
        return;
    }
    app.apply(Intent::Delete(id));
}
