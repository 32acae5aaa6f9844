use crate::model::list::TaskList;
use crate::model::task::Task;

/// Parse a task file from its source text. Never fails.
///
/// One task per line: `[x] ` marks a completed task, any other
/// single-character bracket marker (normally `[ ] `) an incomplete one.
/// A line with no recognized marker is kept whole as an incomplete task
/// so a hand-edited file never loses content. Blank lines are skipped.
pub fn parse_list(source: &str) -> TaskList {
    let tasks = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    TaskList::from_tasks(tasks)
}

fn parse_line(line: &str) -> Task {
    if let Some(text) = line.strip_prefix("[x] ") {
        return Task {
            text: text.to_string(),
            completed: true,
        };
    }
    if let Some(text) = strip_marker(line) {
        return Task {
            text: text.to_string(),
            completed: false,
        };
    }
    Task::new(line)
}

/// Strip a `[c] ` prefix where `c` is exactly one character.
fn strip_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let mut chars = rest.chars();
    chars.next()?;
    chars.as_str().strip_prefix("] ")
}
