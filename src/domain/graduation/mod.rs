//! Graduation module - belts and time-in-belt progress.

mod belt;
mod calculator;

pub use belt::Belt;
pub use calculator::{evaluate, GraduationProgress, GraduationStatus};
