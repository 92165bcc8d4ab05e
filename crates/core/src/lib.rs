#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod scoring;
pub mod time;
pub mod tracker;

pub use time::Clock;
