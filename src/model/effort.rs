//! Effort: the inputs every workout shares, and the gait formulas built on them.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// The sensor readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effort {
    /// Discrete motions counted by the sensor: steps or strokes.
    pub action_count: u64,

    /// How long the workout lasted.
    pub duration_hours: f64,

    /// Athlete weight.
    pub weight_kg: f64,
}

impl Effort {
    /// Distance covered when each action moves the athlete `len_step_m` meters.
    #[allow(clippy::cast_precision_loss)]
    pub fn distance_km(&self, len_step_m: f64) -> f64 {
        // Dispatch caps counts at 2^53, where the conversion is exact.
        self.action_count as f64 * len_step_m / M_IN_KM
    }

    /// Average speed over the whole workout for the given action length.
    pub fn mean_speed_kmh(&self, len_step_m: f64) -> f64 {
        self.distance_km(len_step_m) / self.duration_hours
    }
}
