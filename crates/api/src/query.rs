//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Hard cap applied to every `limit` parameter.
pub const MAX_LIMIT: i64 = 500;

pub const DEFAULT_RECENT_TRANSACTIONS: i64 = 10;
pub const DEFAULT_RANKINGS: i64 = 50;
pub const DEFAULT_ACTIVITY: i64 = 20;

/// `?limit=` kept as raw text so bad values fall back instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    pub fn resolve(&self, default: i64) -> i64 {
        resolve_limit(self.limit.as_deref(), default)
    }
}

/// Missing, non-numeric or non-positive values yield `default`; anything
/// above [`MAX_LIMIT`] is capped.
pub fn resolve_limit(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
        .min(MAX_LIMIT)
}

/// `GET /students/search?q=`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /students?floor=&grade=&active=`
#[derive(Debug, Default, Deserialize)]
pub struct StudentListParams {
    pub floor: Option<String>,
    pub grade: Option<String>,
    pub active: Option<bool>,
}

/// `GET /rankings?limit=&floor=&grade=`
#[derive(Debug, Default, Deserialize)]
pub struct RankingParams {
    pub limit: Option<String>,
    pub floor: Option<String>,
    pub grade: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbage_limit_uses_default() {
        assert_eq!(resolve_limit(None, 10), 10);
        assert_eq!(resolve_limit(Some(""), 10), 10);
        assert_eq!(resolve_limit(Some("ten"), 10), 10);
        assert_eq!(resolve_limit(Some("0"), 20), 20);
        assert_eq!(resolve_limit(Some("-4"), 20), 20);
    }

    #[test]
    fn valid_limit_is_used_and_capped() {
        assert_eq!(resolve_limit(Some("3"), 10), 3);
        assert_eq!(resolve_limit(Some(" 25 "), 10), 25);
        assert_eq!(resolve_limit(Some("100000"), 10), MAX_LIMIT);
    }

    #[test]
    fn params_resolve_through_helper() {
        let params = LimitParams {
            limit: Some("7".into()),
        };
        assert_eq!(params.resolve(DEFAULT_ACTIVITY), 7);
        assert_eq!(LimitParams::default().resolve(DEFAULT_RANKINGS), 50);
    }
}
