//! Workout: the three tracked activities and the capability they share.

use std::fmt;

use super::{
    Report, WorkoutError,
    effort::{self, Effort},
    running::Running,
    swimming::Swimming,
    walking::SportsWalking,
};

/// Which activity a record describes.
///
/// Owns everything that is fixed per activity: the sensor tag,
/// the display label, and the positional layout of raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// Every kind, in the order the sensors document them.
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// The sensor tag. Matching is case-sensitive.
    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Display name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Field names in the order raw values are assigned.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What every workout can compute from its readings.
///
/// Distance and speed default to the walking gait; calories have no
/// default, so each activity must supply its own formula.
pub trait Training {
    const KIND: WorkoutKind;

    /// Distance covered by a single action, in meters.
    const LEN_STEP_M: f64 = effort::LEN_STEP_M;

    fn effort(&self) -> &Effort;

    fn distance_km(&self) -> f64 {
        self.effort().distance_km(Self::LEN_STEP_M)
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.effort().mean_speed_kmh(Self::LEN_STEP_M)
    }

    fn calories_kcal(&self) -> f64;

    /// Compute every metric and bundle them into a report.
    ///
    /// Fails with [`WorkoutError::DegenerateInput`] when a metric is not finite,
    /// which happens when duration (or a walker's weight) is zero or so small
    /// that dividing by it overflows.
    fn report(&self) -> Result<Report, WorkoutError> {
        let report = Report {
            workout_type: Self::KIND.label(),
            duration: self.effort().duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories_kcal(),
        };

        match report.non_finite_metric() {
            Some(metric) => Err(WorkoutError::DegenerateInput {
                kind: Self::KIND,
                metric,
            }),
            None => Ok(report),
        }
    }
}

/// A single logged workout of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Swimming(_) => WorkoutKind::Swimming,
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    pub fn report(&self) -> Result<Report, WorkoutError> {
        match self {
            Self::Swimming(w) => w.report(),
            Self::Running(w) => w.report(),
            Self::SportsWalking(w) => w.report(),
        }
    }
}
