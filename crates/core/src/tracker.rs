//! Pure tracker reducers: task generation, progress, and streak.
//!
//! These take immutable inputs and return values, so they are testable
//! without any UI or storage in the loop. The stateful day workflow lives in
//! the services crate.

use crate::catalog;
use crate::model::{AnswerSnapshot, Category, Day, ImpactValue, Task};

/// Answers at or above this value flag their category as "needs improvement".
///
/// Every question's two worst options carry values 3 and 4.
pub const IMPROVEMENT_THRESHOLD: ImpactValue = 3;

/// Categories whose snapshot answer meets [`IMPROVEMENT_THRESHOLD`], in fixed
/// category order.
#[must_use]
pub fn flagged_categories(snapshot: &AnswerSnapshot) -> Vec<Category> {
    Category::ALL
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            snapshot
                .answer(*index)
                .is_some_and(|value| value >= IMPROVEMENT_THRESHOLD)
        })
        .map(|(_, category)| *category)
        .collect()
}

/// Generates the candidate task list for a new day from the snapshot.
///
/// The result concatenates the challenge lists of every flagged category in
/// fixed category order; when nothing is flagged it substitutes
/// [`catalog::DEFAULT_TASKS`]. Descriptions are deterministic for a given
/// snapshot; ids are fresh on every call.
#[must_use]
pub fn generate_tasks(snapshot: &AnswerSnapshot) -> Vec<Task> {
    let mut descriptions: Vec<&str> = Vec::new();
    for category in flagged_categories(snapshot) {
        descriptions.extend_from_slice(catalog::tasks_for(category));
    }
    if descriptions.is_empty() {
        descriptions.extend_from_slice(&catalog::DEFAULT_TASKS);
    }
    descriptions.into_iter().map(Task::new).collect()
}

/// Overall completion percentage across the tasks of confirmed days.
///
/// Returns 0 when no confirmed tasks exist yet.
#[must_use]
pub fn compute_progress(days: &[Day]) -> u8 {
    let mut total = 0_u32;
    let mut done = 0_u32;
    for day in days.iter().filter(|day| day.is_confirmed()) {
        total += day.task_count() as u32;
        done += day.done_count() as u32;
    }
    crate::scoring::round_percent(done, total)
}

/// Count of consecutive successful confirmed days, scanning backward from the
/// most recent confirmed day and stopping at the first unsuccessful one.
#[must_use]
pub fn compute_streak(days: &[Day]) -> u32 {
    days.iter()
        .filter(|day| day.is_confirmed())
        .rev()
        .take_while(|day| day.is_successful())
        .count() as u32
}

/// Impact blurb metric: one tree per 10% of overall progress.
#[must_use]
pub fn trees_planted(progress: u8) -> u32 {
    u32::from(progress) / 10
}
