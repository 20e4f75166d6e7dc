//! Roster search and filter rules.
//!
//! The dashboard filters the already-fetched roster instantly while the
//! server answers `GET /students/search`; both must agree on what matches.
//! The repository uses [`like_pattern`] for the SQL side and the handlers
//! apply [`RosterFilter`] to the full list.

use crate::error::CoreError;
use crate::grading::Grade;

/// Value the dashboard sends for "no filter" in its floor/grade selects.
pub const FILTER_ALL: &str = "all";

/// Read access to the roster fields that search and filters look at.
pub trait RosterEntry {
    fn external_id(&self) -> &str;
    fn name(&self) -> &str;
    fn room(&self) -> &str;
    fn floor(&self) -> &str;
    fn grade(&self) -> &str;
    fn is_active(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match against name, external id, room or floor.
pub fn matches_query<E: RosterEntry + ?Sized>(entry: &E, query: &str) -> bool {
    let needle = query.to_lowercase();
    [entry.name(), entry.external_id(), entry.room(), entry.floor()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Build an `ILIKE` pattern that matches `query` as a literal substring.
///
/// `\`, `%` and `_` are escaped with a backslash (PostgreSQL's default
/// `LIKE` escape character).
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Reject a missing or empty search query.
pub fn validate_query(query: Option<&str>) -> Result<&str, CoreError> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(CoreError::Validation("Search query is required".into())),
    }
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Floor / grade / active-status filter for the roster view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub floor: Option<String>,
    pub grade: Option<Grade>,
    pub active: Option<bool>,
}

impl RosterFilter {
    /// Build a filter from raw query values. Empty strings and `"all"` mean
    /// "no filter"; an unknown grade label is a validation error.
    pub fn from_params(
        floor: Option<&str>,
        grade: Option<&str>,
        active: Option<bool>,
    ) -> Result<Self, CoreError> {
        let floor = normalize_choice(floor).map(str::to_string);
        let grade = normalize_choice(grade).map(Grade::parse).transpose()?;
        Ok(Self {
            floor,
            grade,
            active,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.floor.is_none() && self.grade.is_none() && self.active.is_none()
    }

    pub fn matches<E: RosterEntry + ?Sized>(&self, entry: &E) -> bool {
        self.floor.as_deref().is_none_or(|f| entry.floor() == f)
            && self.grade.is_none_or(|g| entry.grade() == g.as_str())
            && self.active.is_none_or(|a| entry.is_active() == a)
    }

    /// Keep only matching entries, preserving order.
    pub fn apply<E: RosterEntry>(&self, entries: Vec<E>) -> Vec<E> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Treat `None`, `""` and `"all"` as "no selection".
pub fn normalize_choice(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Entry {
        external_id: &'static str,
        name: &'static str,
        room: &'static str,
        floor: &'static str,
        grade: &'static str,
        active: bool,
    }

    impl RosterEntry for Entry {
        fn external_id(&self) -> &str {
            self.external_id
        }
        fn name(&self) -> &str {
            self.name
        }
        fn room(&self) -> &str {
            self.room
        }
        fn floor(&self) -> &str {
            self.floor
        }
        fn grade(&self) -> &str {
            self.grade
        }
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn asha() -> Entry {
        Entry {
            external_id: "S100",
            name: "Asha Rao",
            room: "12A",
            floor: "2",
            grade: "A+",
            active: true,
        }
    }

    fn vikram() -> Entry {
        Entry {
            external_id: "S200",
            name: "Vikram",
            room: "3B",
            floor: "1",
            grade: "D",
            active: false,
        }
    }

    #[test]
    fn query_matches_any_field_case_insensitively() {
        let e = asha();
        assert!(matches_query(&e, "asha"));
        assert!(matches_query(&e, "s10"));
        assert!(matches_query(&e, "12a"));
        assert!(matches_query(&e, "2"));
        assert!(!matches_query(&e, "vikram"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("asha"), "%asha%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn empty_query_rejected() {
        assert_matches!(validate_query(None), Err(CoreError::Validation(_)));
        assert_matches!(validate_query(Some("")), Err(CoreError::Validation(_)));
        assert_eq!(validate_query(Some("a")).unwrap(), "a");
    }

    #[test]
    fn all_means_no_filter() {
        let filter = RosterFilter::from_params(Some("all"), Some("all"), None).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn unknown_grade_is_rejected() {
        assert_matches!(
            RosterFilter::from_params(None, Some("Z"), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn filters_combine() {
        let filter = RosterFilter::from_params(Some("2"), Some("A+"), Some(true)).unwrap();
        assert!(filter.matches(&asha()));
        assert!(!filter.matches(&vikram()));

        let inactive = RosterFilter::from_params(None, None, Some(false)).unwrap();
        let kept = inactive.apply(vec![asha(), vikram()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].external_id, "S200");
    }
}
