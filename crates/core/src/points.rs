//! Point-change rules: applying a delta, the activity summary line, and the
//! catalog of common award/deduction reasons.

use serde::Serialize;

use crate::error::CoreError;
use crate::grading::Grade;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Attribution recorded when a transaction does not name who performed it.
pub const DEFAULT_ADDED_BY: &str = "Admin";

/// Action label of the activity entry written for every points transaction.
pub const ACTIVITY_POINTS_UPDATED: &str = "Points Updated";

// ---------------------------------------------------------------------------
// Delta application
// ---------------------------------------------------------------------------

/// Outcome of applying a delta to a student's running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsChange {
    pub new_total: i32,
    pub grade: Grade,
}

/// Apply `delta` to `current` and derive the new grade.
///
/// No floor or ceiling is enforced, but a delta that would take the total
/// outside the `i32` range is refused so the ledger always sums to the total.
pub fn apply_delta(current: i32, delta: i32) -> Result<PointsChange, CoreError> {
    let new_total = current.checked_add(delta).ok_or_else(|| {
        CoreError::Validation(format!(
            "pointsChanged {delta} would take the total of {current} out of range"
        ))
    })?;
    Ok(PointsChange {
        new_total,
        grade: Grade::for_points(new_total),
    })
}

/// Reject a zero delta.
pub fn validate_delta(delta: i32) -> Result<(), CoreError> {
    if delta == 0 {
        return Err(CoreError::Validation(
            "pointsChanged must be a non-zero integer".into(),
        ));
    }
    Ok(())
}

/// Human-readable summary written to the activity log, e.g.
/// `"Added 85 points: Winners in competition"`.
pub fn activity_description(delta: i32, reason: &str) -> String {
    let verb = if delta > 0 { "Added" } else { "Removed" };
    format!("{verb} {} points: {reason}", delta.unsigned_abs())
}

// ---------------------------------------------------------------------------
// Reason catalog
// ---------------------------------------------------------------------------

/// A common reason with its conventional signed point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReasonPreset {
    pub label: &'static str,
    pub points: i32,
}

const fn preset(label: &'static str, points: i32) -> ReasonPreset {
    ReasonPreset { label, points }
}

/// Awards offered by the points form.
pub const AWARD_REASONS: &[ReasonPreset] = &[
    preset("Participation in competition", 5),
    preset("Helping others", 5),
    preset("Room cleaning competition 1st", 10),
    preset("Room cleaning competition 2nd", 7),
    preset("Room cleaning competition 3rd", 5),
    preset("Winners in competition", 15),
    preset("Good discipline", 10),
];

/// Deductions offered by the points form.
pub const DEDUCTION_REASONS: &[ReasonPreset] = &[
    preset("No Dress code", -5),
    preset("Incomplete homework", -3),
    preset("Late from playing bell", -3),
    preset("Absent to school", -10),
    preset("No room cleaning", -7),
    preset("Late for prayer", -10),
    preset("Fighting", -10),
    preset("Indiscipline in study hour", -5),
    preset("Roaming outside", -5),
    preset("Not speaking in English", -10),
    preset("Late for pooja", -10),
    preset("Talking in studying", -3),
    preset("No discipline", -10),
    preset("Speaking Bad words", -5),
    preset("Disobeying in-charges", -10),
    preset("Damaging gurukul properties", -20),
    preset("No pooja equipment", -3),
    preset("No cupboard cleaning", -3),
];

/// The full catalog, awards first.
pub fn reason_catalog() -> Vec<ReasonPreset> {
    AWARD_REASONS
        .iter()
        .chain(DEDUCTION_REASONS)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn award_crosses_into_a_plus() {
        let change = apply_delta(0, 85).unwrap();
        assert_eq!(change.new_total, 85);
        assert_eq!(change.grade, Grade::APlus);
    }

    #[test]
    fn deduction_may_go_negative() {
        let change = apply_delta(5, -1000).unwrap();
        assert_eq!(change.new_total, -995);
        assert_eq!(change.grade, Grade::D);
    }

    #[test]
    fn landing_on_boundary_takes_higher_grade() {
        assert_eq!(apply_delta(15, 5).unwrap().grade, Grade::C);
        assert_eq!(apply_delta(50, -10).unwrap().grade, Grade::B);
        assert_eq!(apply_delta(45, 15).unwrap().grade, Grade::A);
        assert_eq!(apply_delta(90, -10).unwrap().grade, Grade::APlus);
    }

    #[test]
    fn out_of_range_total_is_refused() {
        assert_matches!(apply_delta(i32::MAX, 10), Err(CoreError::Validation(_)));
        assert_matches!(apply_delta(i32::MIN, -10), Err(CoreError::Validation(_)));
        assert_eq!(apply_delta(i32::MAX - 10, 10).unwrap().new_total, i32::MAX);
    }

    #[test]
    fn zero_delta_rejected() {
        assert_matches!(validate_delta(0), Err(CoreError::Validation(_)));
        assert!(validate_delta(1).is_ok());
        assert!(validate_delta(-1).is_ok());
    }

    #[test]
    fn description_for_award() {
        assert_eq!(
            activity_description(85, "Winners in competition"),
            "Added 85 points: Winners in competition"
        );
    }

    #[test]
    fn description_for_deduction_uses_magnitude() {
        assert_eq!(
            activity_description(-10, "Fighting"),
            "Removed 10 points: Fighting"
        );
    }

    #[test]
    fn catalog_signs_match_sections() {
        assert!(AWARD_REASONS.iter().all(|r| r.points > 0));
        assert!(DEDUCTION_REASONS.iter().all(|r| r.points < 0));
        assert_eq!(
            reason_catalog().len(),
            AWARD_REASONS.len() + DEDUCTION_REASONS.len()
        );
    }
}
