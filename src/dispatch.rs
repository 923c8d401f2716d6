//! Dispatch: resolve a sensor tag and build the matching workout.
//!
//! Values are assigned positionally, in the order given by
//! [`WorkoutKind::fields`]. The dispatcher checks only what it must to build
//! a workout: the tag, the value count, and that `action_count` is a count.

use tracing::debug;

use crate::model::{Mismatch, Running, SportsWalking, Swimming, Workout, WorkoutError, WorkoutKind};

/// 2^53: every whole `f64` up to here is an exact count.
const MAX_ACTION_COUNT: f64 = 9_007_199_254_740_992.0;

/// Build a workout from a sensor tag and its raw values.
pub fn read_package(tag: &str, values: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(tag).ok_or_else(|| WorkoutError::InvalidWorkoutType {
        tag: tag.to_string(),
    })?;

    debug!(tag, values = values.len(), "dispatching package");

    let workout = match (kind, values) {
        (WorkoutKind::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            Workout::Swimming(Swimming::new(
                action_count(kind, action)?,
                duration,
                weight,
                pool_length,
                pool_laps,
            ))
        }
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Workout::Running(Running::new(action_count(kind, action)?, duration, weight))
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Workout::SportsWalking(SportsWalking::new(
                action_count(kind, action)?,
                duration,
                weight,
                height,
            ))
        }
        (kind, values) => {
            return Err(WorkoutError::ArgumentMismatch {
                kind,
                mismatch: Mismatch::Count {
                    expected: kind.fields().len(),
                    found: values.len(),
                },
            });
        }
    };

    Ok(workout)
}

/// Interpret a raw value as a step or stroke count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action_count(kind: WorkoutKind, value: f64) -> Result<u64, WorkoutError> {
    if !(0.0..=MAX_ACTION_COUNT).contains(&value) || value.fract() != 0.0 {
        return Err(WorkoutError::ArgumentMismatch {
            kind,
            mismatch: Mismatch::ActionCount { value },
        });
    }
    // Whole and in range, so the cast is exact.
    Ok(value as u64)
}
