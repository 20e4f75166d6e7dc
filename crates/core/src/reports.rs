//! Report shaping shared by the reports endpoints.

use serde::Serialize;

use crate::grading::Grade;

/// Number of students holding one grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: i64,
}

/// Turn `(label, count)` rows into a full distribution over every grade,
/// best grade first. Grades with no students get a zero count; labels that
/// are not valid grades are ignored.
pub fn grade_distribution<I>(rows: I) -> Vec<GradeCount>
where
    I: IntoIterator<Item = (String, i64)>,
{
    let mut counts = Grade::ALL.map(|grade| GradeCount { grade, count: 0 });
    for (label, count) in rows {
        if let Ok(grade) = Grade::parse(&label) {
            if let Some(slot) = counts.iter_mut().find(|c| c.grade == grade) {
                slot.count += count;
            }
        }
    }
    counts.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_fills_missing_grades_in_order() {
        let dist = grade_distribution(vec![("B".to_string(), 3), ("A+".to_string(), 1)]);
        let summary: Vec<(&str, i64)> = dist.iter().map(|c| (c.grade.as_str(), c.count)).collect();
        assert_eq!(
            summary,
            vec![("A+", 1), ("A", 0), ("B", 3), ("C", 0), ("D", 0)]
        );
    }

    #[test]
    fn ignores_unknown_labels() {
        let dist = grade_distribution(vec![("Z".to_string(), 9)]);
        assert!(dist.iter().all(|c| c.count == 0));
    }
}
