mod game;
mod home;
mod quiz;
mod state;
mod tracker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tracker::TrackerView;
