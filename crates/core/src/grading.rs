//! Letter grades derived from a student's point total.
//!
//! This module lives in `core` (zero internal deps) so the repository layer,
//! the API handlers and the report builders all share one threshold table.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Minimum total (inclusive) for an `A+`.
pub const THRESHOLD_A_PLUS: i32 = 80;

/// Minimum total (inclusive) for an `A`.
pub const THRESHOLD_A: i32 = 60;

/// Minimum total (inclusive) for a `B`.
pub const THRESHOLD_B: i32 = 40;

/// Minimum total (inclusive) for a `C`.
pub const THRESHOLD_C: i32 = 20;

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// A student's letter grade. Stored in the `students.grade` column as its label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    #[default]
    D,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D];

    /// Derive the grade for a point total. Thresholds are inclusive lower
    /// bounds evaluated from the top, so exactly 80 is an `A+`.
    pub fn for_points(total: i32) -> Self {
        if total >= THRESHOLD_A_PLUS {
            Grade::APlus
        } else if total >= THRESHOLD_A {
            Grade::A
        } else if total >= THRESHOLD_B {
            Grade::B
        } else if total >= THRESHOLD_C {
            Grade::C
        } else {
            Grade::D
        }
    }

    /// The label persisted and returned over the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Parse a stored or user-supplied label.
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == label)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid grade '{label}'. Must be one of: A+, A, B, C, D"
                ))
            })
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn boundaries_take_the_higher_grade() {
        assert_eq!(Grade::for_points(80), Grade::APlus);
        assert_eq!(Grade::for_points(60), Grade::A);
        assert_eq!(Grade::for_points(40), Grade::B);
        assert_eq!(Grade::for_points(20), Grade::C);
    }

    #[test]
    fn just_below_boundaries() {
        assert_eq!(Grade::for_points(79), Grade::A);
        assert_eq!(Grade::for_points(59), Grade::B);
        assert_eq!(Grade::for_points(39), Grade::C);
        assert_eq!(Grade::for_points(19), Grade::D);
    }

    #[test]
    fn zero_and_negative_totals_are_d() {
        assert_eq!(Grade::for_points(0), Grade::D);
        assert_eq!(Grade::for_points(-995), Grade::D);
        assert_eq!(Grade::for_points(i32::MIN), Grade::D);
    }

    #[test]
    fn very_high_totals_are_a_plus() {
        assert_eq!(Grade::for_points(10_000), Grade::APlus);
    }

    #[test]
    fn parse_accepts_every_label() {
        for grade in Grade::ALL {
            assert_eq!(Grade::parse(grade.as_str()).unwrap(), grade);
        }
    }

    #[test]
    fn parse_rejects_unknown_label() {
        assert_matches!(Grade::parse("E"), Err(CoreError::Validation(_)));
        assert_matches!(Grade::parse("a+"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
    }
}
