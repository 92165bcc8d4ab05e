use eco_core::model::{AnswerSnapshot, Day, TaskId};
use eco_core::tracker;

use crate::error::TrackerError;

/// In-memory tracker state for one sitting: the snapshot it was derived from
/// and the day list.
///
/// The board is transient by design; it is regenerated deterministically from
/// the persisted snapshot whenever the tracker initializes. Only the latest
/// day is ever editable; every earlier day is read-only history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerBoard {
    snapshot: AnswerSnapshot,
    days: Vec<Day>,
}

impl TrackerBoard {
    /// Builds a board with day 1 freshly generated and awaiting selection.
    #[must_use]
    pub fn new(snapshot: AnswerSnapshot) -> Self {
        let first = Day::new(1, tracker::generate_tasks(&snapshot));
        Self {
            snapshot,
            days: vec![first],
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> &AnswerSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// The latest day, the only one that accepts edits.
    #[must_use]
    pub fn current_day(&self) -> &Day {
        self.days.last().expect("board always holds at least one day")
    }

    fn current_day_mut(&mut self) -> &mut Day {
        self.days
            .last_mut()
            .expect("board always holds at least one day")
    }

    /// Toggles a task's selected flag on the current day.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Day` when the current day is already confirmed
    /// or the task id is unknown.
    pub fn toggle_selected(&mut self, id: TaskId) -> Result<(), TrackerError> {
        self.current_day_mut().toggle_selected(id)?;
        Ok(())
    }

    /// Finalizes the current day's challenge set.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Day` with `DayError::NoTasksSelected` (state
    /// unchanged) when nothing is selected.
    pub fn confirm_current(&mut self) -> Result<(), TrackerError> {
        self.current_day_mut().confirm()?;
        Ok(())
    }

    /// Toggles a task's done flag on the current (confirmed) day. Earlier
    /// days cannot be edited.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Day` when the current day is unconfirmed or the
    /// task id belongs to an earlier day.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), TrackerError> {
        self.current_day_mut().toggle_done(id)?;
        Ok(())
    }

    /// Appends a fresh selecting-phase day generated from the same snapshot.
    ///
    /// Task descriptions repeat deterministically; ids are fresh. The
    /// previous latest day becomes read-only.
    pub fn add_day(&mut self) {
        let number = self.days.len() as u32 + 1;
        let tasks = tracker::generate_tasks(&self.snapshot);
        self.days.push(Day::new(number, tasks));
    }

    /// Overall completion percentage across confirmed days.
    #[must_use]
    pub fn progress(&self) -> u8 {
        tracker::compute_progress(&self.days)
    }

    /// Consecutive successful confirmed days, newest backward.
    #[must_use]
    pub fn streak(&self) -> u32 {
        tracker::compute_streak(&self.days)
    }

    /// Impact blurb metric: one tree per 10% of progress.
    #[must_use]
    pub fn trees_planted(&self) -> u32 {
        tracker::trees_planted(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::model::{DayError, DayPhase, Task};
    use eco_core::time::fixed_now;

    fn board() -> TrackerBoard {
        // Every category flagged: 14 candidate tasks on each day.
        let snapshot = AnswerSnapshot::new(vec![4; 7], fixed_now()).unwrap();
        TrackerBoard::new(snapshot)
    }

    fn select_and_confirm(board: &mut TrackerBoard, count: usize) -> Vec<TaskId> {
        let ids: Vec<TaskId> = board
            .current_day()
            .tasks()
            .iter()
            .take(count)
            .map(Task::id)
            .collect();
        for id in &ids {
            board.toggle_selected(*id).unwrap();
        }
        board.confirm_current().unwrap();
        board
            .current_day()
            .tasks()
            .iter()
            .map(Task::id)
            .collect()
    }

    #[test]
    fn starts_with_day_one_selecting() {
        let board = board();
        assert_eq!(board.days().len(), 1);
        assert_eq!(board.current_day().number(), 1);
        assert_eq!(board.current_day().phase(), DayPhase::Selecting);
        assert_eq!(board.current_day().task_count(), 14);
    }

    #[test]
    fn confirm_without_selection_leaves_board_unchanged() {
        let mut board = board();
        let before = board.clone();
        let err = board.confirm_current().unwrap_err();
        assert!(matches!(err, TrackerError::Day(DayError::NoTasksSelected)));
        assert_eq!(board, before);
    }

    #[test]
    fn repeated_days_repeat_descriptions_with_fresh_ids() {
        let mut board = board();
        let first: Vec<String> = board
            .current_day()
            .tasks()
            .iter()
            .map(|t| t.description().to_string())
            .collect();
        let first_ids: Vec<TaskId> =
            board.current_day().tasks().iter().map(Task::id).collect();

        board.add_day();
        let second: Vec<String> = board
            .current_day()
            .tasks()
            .iter()
            .map(|t| t.description().to_string())
            .collect();
        let second_ids: Vec<TaskId> =
            board.current_day().tasks().iter().map(Task::id).collect();

        assert_eq!(first, second);
        assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
        assert_eq!(board.current_day().number(), 2);
    }

    #[test]
    fn earlier_days_are_read_only() {
        let mut board = board();
        let ids = select_and_confirm(&mut board, 2);
        board.add_day();

        // ids belong to day 1, which is no longer current.
        let err = board.toggle_done(ids[0]).unwrap_err();
        assert!(matches!(
            err,
            TrackerError::Day(DayError::NotConfirmed | DayError::UnknownTask(_))
        ));
    }

    #[test]
    fn progress_and_streak_follow_the_spec_examples() {
        let mut board = board();

        // Day 1: 2 tasks, 1 done -> 50%.
        let ids = select_and_confirm(&mut board, 2);
        board.toggle_done(ids[0]).unwrap();
        assert_eq!(board.progress(), 50);
        assert_eq!(board.streak(), 1);

        // Day 2: 2 tasks, 0 done -> cumulative 25%, streak broken.
        board.add_day();
        select_and_confirm(&mut board, 2);
        assert_eq!(board.progress(), 25);
        assert_eq!(board.streak(), 0);
    }

    #[test]
    fn trees_planted_follows_progress() {
        let mut board = board();
        let ids = select_and_confirm(&mut board, 2);
        board.toggle_done(ids[0]).unwrap();
        board.toggle_done(ids[1]).unwrap();
        assert_eq!(board.progress(), 100);
        assert_eq!(board.trees_planted(), 10);
    }
}
