use serde::{Deserialize, Serialize};

/// A single to-do entry: text plus completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text (trimmed, non-empty for tasks created through the ops)
    pub text: String,
    /// Whether the task is checked off
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }
}
