mod board;
mod service;

// Public API of the tracker subsystem.
pub use crate::error::TrackerError;
pub use board::TrackerBoard;
pub use service::TrackerService;
