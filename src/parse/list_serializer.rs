use crate::model::list::TaskList;

/// Serialize the task list to its persisted text form: one
/// newline-terminated line per task, in order.
///
/// Task text is written verbatim. Texts contain no newlines by
/// construction (input comes from a single-line field).
pub fn serialize_list(list: &TaskList) -> String {
    let mut out = String::new();
    for task in list.tasks() {
        out.push_str(if task.completed { "[x] " } else { "[ ] " });
        out.push_str(&task.text);
        out.push('\n');
    }
    out
}
