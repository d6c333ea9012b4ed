//! Expiry cutoff for stale race posts.
//!
//! Posts are only interesting up to their race day. Race days are judged on
//! the Japanese calendar (UTC+9) regardless of where the server runs, and a
//! post survives one extra full day so overseas readers in earlier timezones
//! still see yesterday's card.

use chrono::{NaiveDate, TimeDelta};

use crate::types::Timestamp;

/// Race days are judged in Japanese local time.
pub const JST_UTC_OFFSET_HOURS: i64 = 9;

/// The date below which posts are stale: yesterday on the JST calendar.
///
/// Rows with `race_date < purge_cutoff(now)` are eligible for deletion.
pub fn purge_cutoff(now_utc: Timestamp) -> NaiveDate {
    let today_jst = (now_utc + TimeDelta::hours(JST_UTC_OFFSET_HOURS)).date_naive();
    today_jst.pred_opt().unwrap_or(today_jst)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn cutoff_is_yesterday_in_jst() {
        // 14:00 UTC is 23:00 JST the same day.
        assert_eq!(purge_cutoff(utc(2024, 5, 5, 14, 0)), date(2024, 5, 4));
    }

    #[test]
    fn jst_rolls_over_before_utc() {
        // 15:00 UTC is already 00:00 JST on the 6th, so the cutoff advances.
        assert_eq!(purge_cutoff(utc(2024, 5, 5, 15, 0)), date(2024, 5, 5));
    }

    #[test]
    fn cutoff_crosses_month_boundary() {
        assert_eq!(purge_cutoff(utc(2024, 3, 1, 0, 0)), date(2024, 2, 29));
    }

    #[test]
    fn race_day_itself_is_not_stale() {
        // A post for the 5th must survive all of the 5th and 6th (JST).
        let cutoff = purge_cutoff(utc(2024, 5, 6, 12, 0));
        assert!(date(2024, 5, 5) >= cutoff);
    }
}
