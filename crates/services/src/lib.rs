#![forbid(unsafe_code)]

pub mod error;
pub mod game_session;
pub mod quiz_session;
pub mod survey_service;
pub mod tracker;

pub use eco_core::Clock;

pub use error::{GameError, QuizError, SurveyError, TrackerError};
pub use game_session::{GameProgress, GameSession, GuessOutcome};
pub use quiz_session::{QuizProgress, QuizSession};
pub use survey_service::SurveyService;
pub use tracker::{TrackerBoard, TrackerService};
