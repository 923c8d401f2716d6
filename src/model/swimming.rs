//! Swimming: speed comes from pool laps, distance from strokes.

use super::{
    effort::{Effort, M_IN_KM},
    workout::{Training, WorkoutKind},
};

/// A pool swim, counted in strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub effort: Effort,
    pub pool_length_m: f64,

    /// Laps swum. Not necessarily whole.
    pub pool_lap_count: f64,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Build a swim from its stroke count, duration, weight, and pool laps.
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
            pool_length_m,
            pool_lap_count,
        }
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;

    /// One stroke.
    const LEN_STEP_M: f64 = 1.38;

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count / M_IN_KM / self.effort.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.effort.weight_kg
    }
}
