//! Output formatting for CLI display.

use crate::model::WorkoutKind;

/// One line describing a workout tag: code, label, and value layout.
pub(super) fn format_kind(kind: WorkoutKind) -> String {
    format!(
        "{}  {:<13}  {}",
        kind.code(),
        kind.label(),
        kind.fields().join(", ")
    )
}
