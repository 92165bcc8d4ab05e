use serde::{Deserialize, Serialize};

use crate::model::ids::TaskId;

/// A single tracker task.
///
/// `selected` is transient and only meaningful while the owning day is in the
/// selecting phase; `done` is only toggled after confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    done: bool,
    selected: bool,
}

impl Task {
    /// Creates a not-done, not-selected task with a fresh id.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            description: description.into(),
            done: false,
            selected: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    pub(crate) fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }

    pub(crate) fn reset_for_confirmed_day(&mut self) {
        self.done = false;
        self.selected = false;
    }
}
