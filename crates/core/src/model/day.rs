use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::TaskId;
use crate::model::task::Task;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DayError {
    #[error("select at least one challenge before confirming")]
    NoTasksSelected,

    #[error("the day's challenges are already confirmed")]
    SelectionLocked,

    #[error("the day's challenges have not been confirmed yet")]
    NotConfirmed,

    #[error("no task with id {0} in this day")]
    UnknownTask(TaskId),
}

//
// ─── DAY ───────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of a tracker day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPhase {
    /// Tasks were generated; the user is choosing today's challenges.
    Selecting,
    /// The challenge set is finalized; only done flags may change.
    Confirmed,
}

/// One tracking period: an ordinal day number and its tasks.
///
/// A day starts in the selecting phase with every generated task offered.
/// Confirming retains only the selected tasks (reset to not-done) and locks
/// further selection. A confirmed day with zero selected tasks is impossible:
/// [`Day::confirm`] rejects it and leaves the day unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    number: u32,
    tasks: Vec<Task>,
    phase: DayPhase,
}

impl Day {
    /// Creates a day in the selecting phase over the given candidate tasks.
    #[must_use]
    pub fn new(number: u32, tasks: Vec<Task>) -> Self {
        Self {
            number,
            tasks,
            phase: DayPhase::Selecting,
        }
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn phase(&self) -> DayPhase {
        self.phase
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.phase == DayPhase::Confirmed
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_selected()).count()
    }

    /// A confirmed day is successful when at least half its tasks are done.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.done_count() * 2 >= self.task_count()
    }

    /// Toggles a task's selected flag during the selecting phase.
    ///
    /// # Errors
    ///
    /// Returns `DayError::SelectionLocked` once the day is confirmed, or
    /// `DayError::UnknownTask` if the id is not part of this day.
    pub fn toggle_selected(&mut self, id: TaskId) -> Result<(), DayError> {
        if self.phase == DayPhase::Confirmed {
            return Err(DayError::SelectionLocked);
        }
        self.task_mut(id)?.toggle_selected();
        Ok(())
    }

    /// Finalizes the day's challenge set.
    ///
    /// Keeps only the selected tasks, resets each to not-done, and locks the
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `DayError::NoTasksSelected` (state unchanged) when nothing is
    /// selected, or `DayError::SelectionLocked` when already confirmed.
    pub fn confirm(&mut self) -> Result<(), DayError> {
        if self.phase == DayPhase::Confirmed {
            return Err(DayError::SelectionLocked);
        }
        if self.selected_count() == 0 {
            return Err(DayError::NoTasksSelected);
        }
        self.tasks.retain(Task::is_selected);
        for task in &mut self.tasks {
            task.reset_for_confirmed_day();
        }
        self.phase = DayPhase::Confirmed;
        Ok(())
    }

    /// Toggles a retained task's done flag on a confirmed day.
    ///
    /// # Errors
    ///
    /// Returns `DayError::NotConfirmed` while the day is still selecting, or
    /// `DayError::UnknownTask` if the id is not part of this day.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), DayError> {
        if self.phase == DayPhase::Selecting {
            return Err(DayError::NotConfirmed);
        }
        self.task_mut(id)?.toggle_done();
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, DayError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(DayError::UnknownTask(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_with(descriptions: &[&str]) -> Day {
        Day::new(1, descriptions.iter().copied().map(Task::new).collect())
    }

    #[test]
    fn confirm_keeps_only_selected_tasks_reset_to_not_done() {
        let mut day = day_with(&["a", "b", "c"]);
        let keep = day.tasks()[1].id();
        day.toggle_selected(keep).unwrap();

        day.confirm().unwrap();

        assert!(day.is_confirmed());
        assert_eq!(day.task_count(), 1);
        assert_eq!(day.tasks()[0].description(), "b");
        assert!(!day.tasks()[0].is_done());
        assert!(!day.tasks()[0].is_selected());
    }

    #[test]
    fn confirm_with_nothing_selected_is_rejected_unchanged() {
        let mut day = day_with(&["a", "b"]);
        let before = day.clone();

        let err = day.confirm().unwrap_err();

        assert_eq!(err, DayError::NoTasksSelected);
        assert_eq!(day, before);
        assert_eq!(day.phase(), DayPhase::Selecting);
    }

    #[test]
    fn done_toggles_require_a_confirmed_day() {
        let mut day = day_with(&["a"]);
        let id = day.tasks()[0].id();

        assert_eq!(day.toggle_done(id), Err(DayError::NotConfirmed));

        day.toggle_selected(id).unwrap();
        day.confirm().unwrap();
        day.toggle_done(id).unwrap();
        assert_eq!(day.done_count(), 1);
    }

    #[test]
    fn selection_is_locked_after_confirm() {
        let mut day = day_with(&["a"]);
        let id = day.tasks()[0].id();
        day.toggle_selected(id).unwrap();
        day.confirm().unwrap();

        assert_eq!(day.toggle_selected(id), Err(DayError::SelectionLocked));
        assert_eq!(day.confirm(), Err(DayError::SelectionLocked));
    }

    #[test]
    fn unknown_task_ids_are_reported() {
        let mut day = day_with(&["a"]);
        let stranger = TaskId::new();
        assert_eq!(
            day.toggle_selected(stranger),
            Err(DayError::UnknownTask(stranger))
        );
    }

    #[test]
    fn success_needs_at_least_half_done() {
        let mut day = day_with(&["a", "b", "c"]);
        for id in day.tasks().iter().map(Task::id).collect::<Vec<_>>() {
            day.toggle_selected(id).unwrap();
        }
        day.confirm().unwrap();
        assert!(!day.is_successful());

        let ids: Vec<TaskId> = day.tasks().iter().map(Task::id).collect();
        day.toggle_done(ids[0]).unwrap();
        // 1 of 3 is below half
        assert!(!day.is_successful());
        day.toggle_done(ids[1]).unwrap();
        assert!(day.is_successful());
    }
}
