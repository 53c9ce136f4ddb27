//! School-week window arithmetic for the weekly schedule view.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Largest week offset the schedule view accepts in either direction,
/// roughly two school years. Callers must reject offsets outside
/// `-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET` before calling
/// [`school_week_start`]; the date arithmetic there is unchecked.
pub const MAX_WEEK_OFFSET: i64 = 104;

/// 1-based weekday index for school days (Monday = 1 through Friday = 5).
///
/// Returns `None` for Saturday and Sunday; those days carry no slots.
pub fn weekday_index(date: NaiveDate) -> Option<i32> {
    match date.weekday() {
        Weekday::Mon => Some(1),
        Weekday::Tue => Some(2),
        Weekday::Wed => Some(3),
        Weekday::Thu => Some(4),
        Weekday::Fri => Some(5),
        Weekday::Sat | Weekday::Sun => None,
    }
}

/// English weekday name, as stored in the `weekday` column of bookings and
/// blocked slots.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday of the school week addressed by `week_offset`.
///
/// Offset 0 is the week currently shown to teachers. Once the school week is
/// effectively over (Friday, Saturday or Sunday) the view rolls forward, so
/// offset 0 already addresses the next week.
///
/// `week_offset` must be within `-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET`.
pub fn school_week_start(today: NaiveDate, week_offset: i64) -> NaiveDate {
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let rolled = match today.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => monday + Days::new(7),
        _ => monday,
    };
    if week_offset >= 0 {
        rolled + Days::new(7 * week_offset as u64)
    } else {
        rolled - Days::new(7 * week_offset.unsigned_abs())
    }
}

/// The five school days (Monday through Friday) starting at `monday`.
pub fn week_days(monday: NaiveDate) -> [NaiveDate; 5] {
    [
        monday,
        monday + Days::new(1),
        monday + Days::new(2),
        monday + Days::new(3),
        monday + Days::new(4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_index_covers_school_days_only() {
        // 2026-08-24 is a Monday.
        assert_eq!(weekday_index(date(2026, 8, 24)), Some(1));
        assert_eq!(weekday_index(date(2026, 8, 28)), Some(5));
        assert_eq!(weekday_index(date(2026, 8, 29)), None);
        assert_eq!(weekday_index(date(2026, 8, 30)), None);
    }

    #[test]
    fn midweek_stays_in_current_week() {
        // Wednesday 2026-08-26 -> Monday 2026-08-24.
        assert_eq!(school_week_start(date(2026, 8, 26), 0), date(2026, 8, 24));
    }

    #[test]
    fn friday_rolls_to_next_week() {
        assert_eq!(school_week_start(date(2026, 8, 28), 0), date(2026, 8, 31));
    }

    #[test]
    fn weekend_rolls_to_next_week() {
        assert_eq!(school_week_start(date(2026, 8, 29), 0), date(2026, 8, 31));
        assert_eq!(school_week_start(date(2026, 8, 30), 0), date(2026, 8, 31));
    }

    #[test]
    fn offset_moves_in_whole_weeks() {
        assert_eq!(school_week_start(date(2026, 8, 26), 1), date(2026, 8, 31));
        assert_eq!(school_week_start(date(2026, 8, 26), -1), date(2026, 8, 17));
    }

    #[test]
    fn offset_bound_stays_representable() {
        let start = school_week_start(date(2026, 8, 26), MAX_WEEK_OFFSET);
        assert_eq!(start, date(2028, 8, 21));
        let start = school_week_start(date(2026, 8, 26), -MAX_WEEK_OFFSET);
        assert_eq!(start, date(2024, 8, 26));
    }

    #[test]
    fn week_days_are_monday_through_friday() {
        let days = week_days(date(2026, 8, 24));
        assert_eq!(days[0], date(2026, 8, 24));
        assert_eq!(days[4], date(2026, 8, 28));
        assert!(days.iter().all(|d| weekday_index(*d).is_some()));
    }

    #[test]
    fn weekday_names_match_stored_format() {
        assert_eq!(weekday_name(date(2026, 8, 24)), "Monday");
        assert_eq!(weekday_name(date(2026, 8, 30)), "Sunday");
    }
}
