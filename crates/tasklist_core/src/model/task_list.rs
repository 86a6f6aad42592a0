//! Pure transforms over an ordered task sequence.
//!
//! # Invariants
//! - Insertion order is preserved by every transform.
//! - Missing ids are no-ops, never errors.
//! - Blank text is never written into the sequence.

use crate::model::task::{normalize_text, Task, TaskId};

/// Appends a task with `id` when `text` is not blank.
///
/// Returns the id of the appended task, or `None` when the input was
/// rejected.
pub fn append(tasks: &mut Vec<Task>, id: TaskId, text: &str) -> Option<TaskId> {
    let text = normalize_text(text)?;
    tasks.push(Task::new(id, text));
    Some(id)
}

/// Removes the task matching `id`. Returns whether anything was removed.
pub fn remove(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Replaces the text of the task matching `id` and resets `is_editing`.
///
/// Returns `false` when `id` is absent or `text` is blank.
pub fn update_text(tasks: &mut [Task], id: TaskId, text: &str) -> bool {
    let Some(text) = normalize_text(text) else {
        return false;
    };
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.text = text;
            task.is_editing = false;
            true
        }
        None => false,
    }
}

/// Linear lookup by id.
pub fn find_by_id(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|task| task.id == id)
}

/// Largest id in the sequence, used to seed id generation.
pub fn max_id(tasks: &[Task]) -> Option<TaskId> {
    tasks.iter().map(|task| task.id).max()
}
