use services::GuessOutcome;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFeedbackVm {
    pub verdict: &'static str,
    pub info: String,
}

#[must_use]
pub fn map_guess_feedback(outcome: &GuessOutcome) -> GameFeedbackVm {
    let verdict = if outcome.correct {
        "Correct!"
    } else {
        "Not quite."
    };
    GameFeedbackVm {
        verdict,
        info: outcome.item.info.to_string(),
    }
}

#[must_use]
pub fn final_game_line(score: u32, total: usize) -> String {
    format!("Final score: {score} / {total}")
}
