use crate::model::list::TaskList;
use crate::model::task::Task;

/// Error type for task-list operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
    #[error("no task at position {0}")]
    OutOfRange(usize),
}

// ---------------------------------------------------------------------------
// Mutating operations
// ---------------------------------------------------------------------------
//
// Every operation validates before mutating: a failing call leaves the
// list exactly as it was.

/// Append a new incomplete task with the trimmed text.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<(), TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    list.tasks.push(Task::new(text));
    Ok(())
}

/// Remove the task at `index`, shifting subsequent tasks left.
pub fn delete_task(list: &mut TaskList, index: usize) -> Result<(), TaskError> {
    if index >= list.len() {
        return Err(TaskError::OutOfRange(index));
    }
    list.tasks.remove(index);
    Ok(())
}

/// Replace the text of the task at `index`, preserving its completion
/// flag. Text is validated before the index.
pub fn edit_task(list: &mut TaskList, index: usize, new_text: &str) -> Result<(), TaskError> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    let task = list
        .tasks
        .get_mut(index)
        .ok_or(TaskError::OutOfRange(index))?;
    task.text = new_text.to_string();
    Ok(())
}

/// Flip the completion flag of the task at `index`.
pub fn toggle_task(list: &mut TaskList, index: usize) -> Result<(), TaskError> {
    let task = list
        .tasks
        .get_mut(index)
        .ok_or(TaskError::OutOfRange(index))?;
    task.completed = !task.completed;
    Ok(())
}

/// Remove all tasks. Whether to confirm first is the caller's decision.
pub fn clear_tasks(list: &mut TaskList) {
    list.tasks.clear();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
