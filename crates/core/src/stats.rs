//! Day boundary used by the `todayActions` counter.
//!
//! "Today" starts at the most recent midnight in the stats timezone: either a
//! fixed UTC offset (`STATS_UTC_OFFSET`) or the server's local timezone.

use chrono::{DateTime, FixedOffset, Local, NaiveTime, Offset, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Which timezone's midnight starts a new stats day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayBoundary {
    /// Midnight in the server process's local timezone.
    #[default]
    ServerLocal,
    /// Midnight at a fixed offset from UTC.
    Fixed(FixedOffset),
}

impl DayBoundary {
    /// Parse an offset such as `+05:30`, `-08:00`, `+0530`, `Z` or `UTC`.
    pub fn parse_offset(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
            return Ok(DayBoundary::Fixed(Utc.fix()));
        }
        raw.parse::<FixedOffset>()
            .map(DayBoundary::Fixed)
            .map_err(|e| CoreError::Validation(format!("Invalid UTC offset '{raw}': {e}")))
    }

    /// The UTC instant at which the day containing `now` began.
    pub fn start_of_day(self, now: Timestamp) -> Timestamp {
        match self {
            DayBoundary::ServerLocal => midnight_in(now.with_timezone(&Local)),
            DayBoundary::Fixed(offset) => midnight_in(now.with_timezone(&offset)),
        }
    }
}

fn midnight_in<Tz: TimeZone>(local: DateTime<Tz>) -> Timestamp {
    let tz = local.timezone();
    let midnight = local.date_naive().and_time(NaiveTime::MIN);
    // A DST jump can skip local midnight; fall back to the earliest valid
    // instant of that wall-clock time, then to the naive UTC reading.
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn utc_boundary_is_utc_midnight() {
        let boundary = DayBoundary::parse_offset("+00:00").unwrap();
        assert_eq!(
            boundary.start_of_day(at(2025, 1, 11, 15, 30)),
            at(2025, 1, 11, 0, 0)
        );
    }

    #[test]
    fn positive_offset_can_start_the_day_on_the_previous_utc_date() {
        // 20:00 UTC on Jan 11 is 01:30 IST on Jan 12; IST midnight is 18:30 UTC.
        let ist = DayBoundary::parse_offset("+05:30").unwrap();
        assert_eq!(
            ist.start_of_day(at(2025, 1, 11, 20, 0)),
            at(2025, 1, 11, 18, 30)
        );
    }

    #[test]
    fn negative_offset() {
        let pst = DayBoundary::parse_offset("-08:00").unwrap();
        assert_eq!(
            pst.start_of_day(at(2025, 1, 11, 3, 0)),
            at(2025, 1, 10, 8, 0)
        );
    }

    #[test]
    fn accepts_compact_and_zulu_forms() {
        assert_eq!(
            DayBoundary::parse_offset("+0530").unwrap(),
            DayBoundary::parse_offset("+05:30").unwrap()
        );
        assert_eq!(
            DayBoundary::parse_offset("Z").unwrap(),
            DayBoundary::parse_offset("+00:00").unwrap()
        );
        assert_eq!(
            DayBoundary::parse_offset(" utc ").unwrap(),
            DayBoundary::Fixed(FixedOffset::east_opt(0).unwrap())
        );
        assert_eq!(
            DayBoundary::parse_offset("-0800").unwrap(),
            DayBoundary::Fixed(FixedOffset::west_opt(8 * 3600).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_offsets() {
        for raw in ["05:30", "+5:30", "+25:00", "+05:75", "IST", ""] {
            assert_matches!(
                DayBoundary::parse_offset(raw),
                Err(CoreError::Validation(_)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn server_local_start_is_not_after_now() {
        let now = Utc::now();
        let start = DayBoundary::ServerLocal.start_of_day(now);
        assert!(start <= now);
        assert!(now - start < chrono::Duration::hours(25));
    }
}
