//! Running: calories grow linearly with mean speed.

use super::{
    effort::{Effort, M_IN_KM, MIN_IN_H},
    workout::{Training, WorkoutKind},
};

/// A run, counted in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub effort: Effort,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    /// Build a run from its step count, duration, and athlete weight.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
        }
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn calories_kcal(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.effort.weight_kg
            / M_IN_KM
            * self.effort.duration_hours
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_uses_step_length() {
        let run = Running::new(15_000, 1.0, 75.0);
        assert_eq!(run.distance_km(), 15_000.0 * 0.65 / 1000.0);
        assert_eq!(run.mean_speed_kmh(), run.distance_km() / 1.0);
    }

    #[test]
    fn calories_follow_speed_formula() {
        let run = Running::new(12_345, 1.5, 68.2);
        let speed = run.distance_km() / 1.5;
        let expected = (18.0 * speed - 20.0) * 68.2 / 1000.0 * 1.5 * 60.0;
        assert_eq!(run.calories_kcal(), expected);
    }

    #[test]
    fn hour_long_run() {
        let run = Running::new(15_000, 1.0, 75.0);
        assert!((run.calories_kcal() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn slow_run_burns_negative_calories() {
        // Below 20/18 km/h the shift dominates; the formula is kept as is.
        let run = Running::new(1000, 1.0, 75.0);
        assert!(run.calories_kcal() < 0.0);
    }
}
