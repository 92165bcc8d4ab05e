mod game_vm;
mod quiz_vm;
mod time_fmt;
mod tracker_vm;

pub use game_vm::{GameFeedbackVm, final_game_line, map_guess_feedback};
pub use quiz_vm::{QuizResultVm, TipLineVm, map_quiz_result};
pub use time_fmt::format_datetime;
pub use tracker_vm::{impact_line, streak_line};
