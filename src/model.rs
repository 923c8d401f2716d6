//! Core data model for fitness tracking.
//!
//! These types cover the whole path from a sensor reading to a summary:
//! raw packages, workouts with their metric formulas, and reports.

mod effort;
mod package;
mod report;
mod running;
mod swimming;
mod walking;
mod workout;

pub use package::{DEMO_PACKAGES, Package};
pub use report::Report;
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
pub use workout::{Workout, WorkoutKind};

/// Errors that can occur while turning a package into a report.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutError {
    #[error("unknown workout type '{tag}' (expected one of SWM, RUN, WLK)")]
    InvalidWorkoutType { tag: String },

    #[error("{kind} ({}): {mismatch}", .kind.fields().join(", "))]
    ArgumentMismatch {
        kind: WorkoutKind,
        mismatch: Mismatch,
    },

    #[error("{kind} {metric} is not a finite number (zero or extreme duration/weight)")]
    DegenerateInput {
        kind: WorkoutKind,
        metric: &'static str,
    },
}

/// How raw values failed to fit a workout's fields.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Mismatch {
    #[error("takes {expected} values, got {found}")]
    Count { expected: usize, found: usize },

    #[error("action_count must be a whole number from 0 to 2^53, got {value}")]
    ActionCount { value: f64 },
}
