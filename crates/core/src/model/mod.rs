pub mod day;
mod ids;
mod item;
mod question;
mod snapshot;
mod task;

pub use day::{Day, DayError, DayPhase};
pub use ids::TaskId;
pub use item::RecyclingItem;
pub use question::{AnswerOption, Category, ImpactValue, Question};
pub use snapshot::{AnswerSnapshot, SnapshotError};
pub use task::Task;
