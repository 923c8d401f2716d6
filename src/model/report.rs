//! Report: the derived metrics of one workout, ready to display.

use std::fmt;

use serde::Serialize;

/// Derived metrics for a single workout.
///
/// Built by [`Training::report`](super::workout::Training::report), rendered once, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Display name of the workout kind.
    pub workout_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl Report {
    /// The summary line, every number fixed to three decimals.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout_type, self.duration, self.distance, self.speed, self.calories,
        )
    }

    /// Name of the first metric that is NaN or infinite, if any.
    pub fn non_finite_metric(&self) -> Option<&'static str> {
        [
            ("duration", self.duration),
            ("distance", self.distance),
            ("speed", self.speed),
            ("calories", self.calories),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            workout_type: "Running",
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn message_uses_three_decimals() {
        assert_eq!(
            sample_report().message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn message_never_uses_exponent_notation() {
        let report = Report {
            workout_type: "Swimming",
            duration: 0.000_001,
            distance: 12_345_678.912_3,
            speed: 1e-9,
            calories: 1e7,
        };
        assert_eq!(
            report.message(),
            "Тип тренировки: Swimming; Длительность: 0.000 ч.; Дистанция: 12345678.912 км; \
             Ср. скорость: 0.000 км/ч; Потрачено ккал: 10000000.000."
        );
    }

    #[test]
    fn display_matches_message() {
        let report = sample_report();
        assert_eq!(report.to_string(), report.message());
    }

    #[test]
    fn finite_report_has_no_degenerate_metric() {
        assert_eq!(sample_report().non_finite_metric(), None);
    }

    #[test]
    fn reports_first_non_finite_metric() {
        let mut report = sample_report();
        report.speed = f64::INFINITY;
        report.calories = f64::NAN;
        assert_eq!(report.non_finite_metric(), Some("speed"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["workoutType"], "Running");
        assert_eq!(json["distance"], 9.75);
        assert_eq!(json["calories"], 699.75);
    }
}
