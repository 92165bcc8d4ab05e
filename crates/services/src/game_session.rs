use rand::seq::SliceRandom;

use eco_core::catalog;
use eco_core::model::RecyclingItem;

use crate::error::GameError;

/// Result of guessing one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub item: RecyclingItem,
    pub guess: bool,
    pub correct: bool,
}

/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameProgress {
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub is_complete: bool,
}

/// In-memory run of the "recyclable or not" game.
///
/// Steps through the item catalog, accepts one boolean guess per item, and
/// accumulates the score. Restart by constructing a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    items: Vec<RecyclingItem>,
    current: usize,
    score: u32,
}

impl GameSession {
    /// Starts a game over the catalog in its fixed order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: catalog::recycling_items().to_vec(),
            current: 0,
            score: 0,
        }
    }

    /// Starts a game with the item order shuffled, for replay value.
    #[must_use]
    pub fn shuffled() -> Self {
        let mut session = Self::new();
        session.items.shuffle(&mut rand::rng());
        session
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&RecyclingItem> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.items.len()
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        GameProgress {
            total: self.items.len(),
            answered: self.current,
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Applies a guess to the current item and advances.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed` once every item has been guessed.
    pub fn guess(&mut self, recyclable: bool) -> Result<GuessOutcome, GameError> {
        let item = *self.items.get(self.current).ok_or(GameError::Completed)?;
        let correct = item.recyclable == recyclable;
        if correct {
            self.score += 1;
        }
        self.current += 1;
        Ok(GuessOutcome {
            item,
            guess: recyclable,
            correct,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_guesses_accumulate_score() {
        let mut session = GameSession::new();
        let total = session.total();
        while let Some(item) = session.current_item().copied() {
            let outcome = session.guess(item.recyclable).unwrap();
            assert!(outcome.correct);
            assert_eq!(outcome.item, item);
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), total as u32);
    }

    #[test]
    fn wrong_guesses_do_not_score() {
        let mut session = GameSession::new();
        while let Some(item) = session.current_item().copied() {
            let outcome = session.guess(!item.recyclable).unwrap();
            assert!(!outcome.correct);
        }
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn guessing_after_completion_is_rejected() {
        let mut session = GameSession::new();
        while !session.is_complete() {
            session.guess(true).unwrap();
        }
        assert_eq!(session.guess(true), Err(GameError::Completed));
    }

    #[test]
    fn shuffle_keeps_the_same_items() {
        let mut names: Vec<&str> = GameSession::shuffled()
            .items
            .iter()
            .map(|item| item.name)
            .collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = catalog::recycling_items()
            .iter()
            .map(|item| item.name)
            .collect();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn progress_tracks_answered_count() {
        let mut session = GameSession::new();
        session.guess(true).unwrap();
        session.guess(false).unwrap();
        let progress = session.progress();
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.total, session.total());
        assert!(!progress.is_complete);
    }
}
