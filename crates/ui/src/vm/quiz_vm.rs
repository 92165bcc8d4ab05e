use eco_core::scoring::{self, QuizScore};
use services::QuizSession;

/// One per-question insight line on the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipLineVm {
    pub category: String,
    pub prompt: String,
    pub tip: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score: QuizScore,
    pub score_line: String,
    pub tips: Vec<TipLineVm>,
}

/// Maps a (usually finished) quiz session onto the results screen.
///
/// Unanswered questions still produce a tip line, using the fallback text.
#[must_use]
pub fn map_quiz_result(session: &QuizSession) -> QuizResultVm {
    let score = session.score();
    let score_line = format!(
        "Score: {} / {} ({}%)",
        score.total, score.max, score.percent
    );
    let tips = session
        .questions()
        .iter()
        .zip(session.answers())
        .map(|(question, answer)| TipLineVm {
            category: question.category.label().to_string(),
            prompt: question.prompt.to_string(),
            tip: scoring::tip_for(question, *answer).to_string(),
        })
        .collect();
    QuizResultVm {
        score,
        score_line,
        tips,
    }
}
