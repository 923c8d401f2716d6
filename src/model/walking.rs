//! Sports walking: calories from weight, plus a speed term that only
//! kicks in once squared speed reaches the athlete's weight.

use super::{
    effort::{Effort, MIN_IN_H},
    workout::{Training, WorkoutKind},
};

/// A sports walk, counted in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub effort: Effort,

    /// Athlete height. Recorded by the sensor but not used by any formula.
    pub height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Build a walk from its step count, duration, weight, and height.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            effort: Effort {
                action_count,
                duration_hours,
                weight_kg,
            },
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.effort.weight_kg;
        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + floor_div(self.mean_speed_kmh().powi(2), weight)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight)
            * self.effort.duration_hours
            * MIN_IN_H
    }
}

/// Floored float division, rounding the quotient toward negative infinity.
///
/// Derives the quotient from the remainder instead of flooring `a / b`,
/// so a quotient that rounds up to a whole number is not bumped past it.
/// Division by zero yields NaN.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_positive() {
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(34.2225, 75.0), 0.0);
        assert_eq!(floor_div(150.0, 75.0), 2.0);
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(-7.0, -2.0), 3.0);
    }

    #[test]
    fn floor_div_zero_quotient_keeps_sign() {
        assert!(floor_div(1.0, 75.0).is_sign_positive());
        assert!(floor_div(-0.0, 75.0).is_sign_negative());
    }

    #[test]
    fn floor_div_uses_remainder_not_rounded_quotient() {
        // 1.0 / 0.1 rounds to exactly 10.0, but 0.1 fits into 1.0 only nine whole times.
        assert_eq!((1.0_f64 / 0.1).floor(), 10.0);
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    #[test]
    fn floor_div_by_zero_is_nan() {
        assert!(floor_div(4.0, 0.0).is_nan());
        assert!(floor_div(0.0, 0.0).is_nan());
    }

    #[test]
    fn slow_walk_ignores_speed_term() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!((walk.distance_km() - 5.85).abs() < 1e-12);
        assert_eq!(walk.calories_kcal(), 0.035 * 75.0 * 1.0 * 60.0);
    }

    #[test]
    fn fast_walk_adds_whole_multiples_of_speed_term() {
        // 20 000 steps in an hour: 13 km/h, 169 / 60 floors to 2.
        let walk = SportsWalking::new(20_000, 1.0, 60.0, 175.0);
        let speed = walk.mean_speed_kmh();
        let expected = (0.035 * 60.0 + (speed * speed / 60.0).floor() * 0.029 * 60.0) * 60.0;
        assert!((walk.calories_kcal() - expected).abs() < 1e-9);
        assert!(walk.calories_kcal() > 0.035 * 60.0 * 60.0);
    }

    #[test]
    fn height_does_not_change_calories() {
        let short = SportsWalking::new(9000, 1.0, 75.0, 150.0);
        let tall = SportsWalking::new(9000, 1.0, 75.0, 210.0);
        assert_eq!(short.calories_kcal(), tall.calories_kcal());
    }

    #[test]
    fn zero_weight_is_not_finite() {
        let walk = SportsWalking::new(9000, 1.0, 0.0, 180.0);
        assert!(!walk.calories_kcal().is_finite());
    }
}
