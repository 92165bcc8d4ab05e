//! Pure quiz scoring and tip lookup.
//!
//! Scoring never fails: unanswered questions contribute 0 toward the total
//! but their maximum still counts toward the denominator, so an incomplete
//! survey simply scores lower.

use crate::model::{ImpactValue, Question};

/// Shown when a question has no tip for the selected value (including no
/// selection at all).
pub const FALLBACK_TIP: &str = "No specific tip available for this answer.";

/// Result of scoring one full answer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub total: u32,
    pub max: u32,
    pub percent: u8,
}

/// Scores `answers` against `questions`, index-aligned.
///
/// A missing entry, a 0, or a value the question does not offer all count as
/// "unanswered". The percentage is `round(100 * total / max)`, or 0 when the
/// question list is empty.
#[must_use]
pub fn score_answers(questions: &[Question], answers: &[ImpactValue]) -> QuizScore {
    let mut total = 0_u32;
    let mut max = 0_u32;
    for (index, question) in questions.iter().enumerate() {
        let chosen = answers
            .get(index)
            .copied()
            .filter(|&value| question.has_option(value))
            .unwrap_or(0);
        total += u32::from(chosen);
        max += u32::from(question.max_value());
    }
    QuizScore {
        total,
        max,
        percent: round_percent(total, max),
    }
}

/// The advisory tip for the user's selected value, falling back to
/// [`FALLBACK_TIP`] when none is keyed to it.
#[must_use]
pub fn tip_for(question: &Question, value: ImpactValue) -> &'static str {
    question.tip(value).unwrap_or(FALLBACK_TIP)
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
#[must_use]
pub fn round_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (f64::from(part) / f64::from(whole) * 100.0).round();
    // 0 <= part <= whole, so the rounded value always fits in u8.
    percent as u8
}
