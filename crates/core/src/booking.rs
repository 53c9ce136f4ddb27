//! The booking validator: sequential guard checks for a slot-booking request.
//!
//! The guards are pure functions over pre-fetched state so they can be unit
//! tested without a database. They short-circuit on the first failure; one
//! error is surfaced per attempt. The read-then-check occupancy guards are an
//! optimization for friendly errors only; the unique constraint on
//! `(date, period)` in the bookings table is the authoritative conflict
//! signal under concurrency.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::periods;
use crate::week;

/// Default maximum number of students in one booking.
pub const DEFAULT_MAX_STUDENTS: usize = 5;

/// Default minimum minutes between "now" and the period start.
pub const DEFAULT_ADVANCE_MINUTES: i64 = 60;

/// One student entry in a booking's student list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub class: String,
}

/// Tunable booking rules, injected at startup rather than scattered through
/// the logic as literals.
#[derive(Debug, Clone)]
pub struct BookingPolicy {
    /// Capacity of a single booking (students per slot).
    pub max_students_per_booking: usize,
    /// Advance-notice threshold in minutes.
    pub advance_minutes: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_students_per_booking: DEFAULT_MAX_STUDENTS,
            advance_minutes: DEFAULT_ADVANCE_MINUTES,
        }
    }
}

/// Guard 0: reject malformed input before touching any state.
///
/// Checks teacher name/class presence, a non-empty student list with
/// non-empty names, and the period range.
pub fn validate_request(
    teacher_name: &str,
    teacher_class: &str,
    students: &[Student],
    period: i32,
) -> Result<(), CoreError> {
    if teacher_name.trim().is_empty() || teacher_class.trim().is_empty() {
        return Err(CoreError::Validation(
            "Teacher name and class are required".into(),
        ));
    }
    if students.is_empty() {
        return Err(CoreError::Validation(
            "At least one student is required".into(),
        ));
    }
    if students.iter().any(|s| s.name.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Student names must not be empty".into(),
        ));
    }
    if !periods::is_valid_period(period) {
        return Err(CoreError::Validation(format!(
            "Period must be between 1 and {}",
            periods::PERIOD_COUNT
        )));
    }
    Ok(())
}

/// Guard 1: the bookability window.
///
/// The date must fall on a school day (Mon-Fri) and the period's start time
/// must be at least `policy.advance_minutes` away from `now`. Weekends and
/// too-late bookings are deliberately folded into one error.
pub fn check_slot_bookable(
    now: NaiveDateTime,
    date: NaiveDate,
    period: i32,
    policy: &BookingPolicy,
) -> Result<(), CoreError> {
    if week::weekday_index(date).is_none() {
        return Err(CoreError::SlotNotBookable(
            "Weekends cannot be booked".into(),
        ));
    }
    let times = periods::period_times(period).ok_or_else(|| {
        CoreError::Validation(format!(
            "Period must be between 1 and {}",
            periods::PERIOD_COUNT
        ))
    })?;
    let slot_start = date.and_time(times.start);
    let minutes_until_start = (slot_start - now).num_minutes();
    if minutes_until_start < policy.advance_minutes {
        return Err(CoreError::SlotNotBookable(format!(
            "Bookings must be made at least {} minutes in advance",
            policy.advance_minutes
        )));
    }
    Ok(())
}

/// `check_slot_bookable` as a boolean, for composing the weekly view.
pub fn is_slot_bookable(
    now: NaiveDateTime,
    date: NaiveDate,
    period: i32,
    policy: &BookingPolicy,
) -> bool {
    check_slot_bookable(now, date, period, policy).is_ok()
}

/// Guard 2: no administrative block in effect.
///
/// `block_reason` is the reason of the blocked-slot row for this
/// `(date, period)`, if one exists.
pub fn check_not_blocked(block_reason: Option<&str>) -> Result<(), CoreError> {
    match block_reason {
        Some(reason) => Err(CoreError::SlotBlocked {
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Guard 3: the slot is not already occupied.
pub fn check_slot_free(slot_is_booked: bool) -> Result<(), CoreError> {
    if slot_is_booked {
        Err(CoreError::SlotAlreadyBooked)
    } else {
        Ok(())
    }
}

/// Guard 4: the request stays within the per-booking capacity.
pub fn check_capacity(students: &[Student], policy: &BookingPolicy) -> Result<(), CoreError> {
    if students.len() > policy.max_students_per_booking {
        Err(CoreError::CapacityExceeded {
            max: policy.max_students_per_booking,
        })
    } else {
        Ok(())
    }
}

/// Guard 5: no incoming student already appears in the slot's existing
/// booking.
///
/// With the unique constraint on `(date, period)` there is at most one
/// existing booking, so guard 3 normally makes this unreachable; it is kept
/// as a safety net, not as a multi-booking-per-slot safeguard.
pub fn check_no_duplicate_students(
    students: &[Student],
    already_booked: &[Student],
) -> Result<(), CoreError> {
    let duplicates: Vec<String> = students
        .iter()
        .filter(|s| already_booked.iter().any(|b| b.name == s.name))
        .map(|s| s.name.clone())
        .collect();
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(CoreError::DuplicateStudent { names: duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        d.and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    fn students(names: &[&str]) -> Vec<Student> {
        names
            .iter()
            .map(|n| Student {
                name: (*n).to_string(),
                class: "4b".to_string(),
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Guard 0: input validation
    // -----------------------------------------------------------------------

    #[test]
    fn valid_request_passes() {
        assert!(validate_request("Frau Meier", "4b", &students(&["Anna"]), 1).is_ok());
    }

    #[test]
    fn missing_teacher_name_is_rejected() {
        let err = validate_request("  ", "4b", &students(&["Anna"]), 1).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn missing_teacher_class_is_rejected() {
        let err = validate_request("Frau Meier", "", &students(&["Anna"]), 1).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn empty_student_list_is_rejected() {
        let err = validate_request("Frau Meier", "4b", &[], 1).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn blank_student_name_is_rejected() {
        let err = validate_request("Frau Meier", "4b", &students(&["Anna", " "]), 1).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn out_of_range_period_is_rejected() {
        for period in [0, 7, -3] {
            let err =
                validate_request("Frau Meier", "4b", &students(&["Anna"]), period).unwrap_err();
            assert_matches!(err, CoreError::Validation(_));
        }
    }

    // -----------------------------------------------------------------------
    // Guard 1: bookability window
    // -----------------------------------------------------------------------

    #[test]
    fn weekday_with_enough_notice_is_bookable() {
        // Monday 2026-08-24, period 1 starts 07:50; "now" is the prior Friday.
        let now = at(date(2026, 8, 21), 12, 0);
        assert!(check_slot_bookable(now, date(2026, 8, 24), 1, &BookingPolicy::default()).is_ok());
    }

    #[test]
    fn saturday_is_not_bookable() {
        let now = at(date(2026, 8, 24), 8, 0);
        let err = check_slot_bookable(now, date(2026, 8, 29), 1, &BookingPolicy::default())
            .unwrap_err();
        assert_matches!(err, CoreError::SlotNotBookable(_));
    }

    #[test]
    fn sunday_is_not_bookable() {
        let now = at(date(2026, 8, 24), 8, 0);
        let err = check_slot_bookable(now, date(2026, 8, 30), 1, &BookingPolicy::default())
            .unwrap_err();
        assert_matches!(err, CoreError::SlotNotBookable(_));
    }

    #[test]
    fn inside_advance_window_is_not_bookable() {
        // Period 3 starts 09:40; 09:00 the same day is only 40 minutes ahead.
        let monday = date(2026, 8, 24);
        let err = check_slot_bookable(at(monday, 9, 0), monday, 3, &BookingPolicy::default())
            .unwrap_err();
        assert_matches!(err, CoreError::SlotNotBookable(_));
    }

    #[test]
    fn exactly_at_threshold_is_bookable() {
        // Period 3 starts 09:40; 08:40 is exactly 60 minutes ahead.
        let monday = date(2026, 8, 24);
        assert!(check_slot_bookable(at(monday, 8, 40), monday, 3, &BookingPolicy::default())
            .is_ok());
    }

    #[test]
    fn past_date_is_not_bookable() {
        let err = check_slot_bookable(
            at(date(2026, 8, 26), 8, 0),
            date(2026, 8, 24),
            1,
            &BookingPolicy::default(),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::SlotNotBookable(_));
    }

    #[test]
    fn custom_advance_threshold_is_honoured() {
        let policy = BookingPolicy {
            advance_minutes: 120,
            ..BookingPolicy::default()
        };
        let monday = date(2026, 8, 24);
        // 90 minutes ahead of period 3: fine for the default, not for 120.
        let now = at(monday, 8, 10);
        assert!(check_slot_bookable(now, monday, 3, &BookingPolicy::default()).is_ok());
        assert_matches!(
            check_slot_bookable(now, monday, 3, &policy).unwrap_err(),
            CoreError::SlotNotBookable(_)
        );
    }

    // -----------------------------------------------------------------------
    // Guards 2 + 3: blocks and occupancy
    // -----------------------------------------------------------------------

    #[test]
    fn blocked_slot_is_rejected_with_reason() {
        let err = check_not_blocked(Some("Beratung")).unwrap_err();
        assert_matches!(err, CoreError::SlotBlocked { reason } if reason == "Beratung");
    }

    #[test]
    fn unblocked_slot_passes() {
        assert!(check_not_blocked(None).is_ok());
    }

    #[test]
    fn occupied_slot_is_rejected() {
        assert_matches!(check_slot_free(true).unwrap_err(), CoreError::SlotAlreadyBooked);
        assert!(check_slot_free(false).is_ok());
    }

    // -----------------------------------------------------------------------
    // Guard 4: capacity
    // -----------------------------------------------------------------------

    #[test]
    fn five_students_fit() {
        let list = students(&["A", "B", "C", "D", "E"]);
        assert!(check_capacity(&list, &BookingPolicy::default()).is_ok());
    }

    #[test]
    fn six_students_exceed_capacity() {
        let list = students(&["A", "B", "C", "D", "E", "F"]);
        let err = check_capacity(&list, &BookingPolicy::default()).unwrap_err();
        assert_matches!(err, CoreError::CapacityExceeded { max: 5 });
    }

    // -----------------------------------------------------------------------
    // Guard 5: duplicate students
    // -----------------------------------------------------------------------

    #[test]
    fn disjoint_student_lists_pass() {
        assert!(
            check_no_duplicate_students(&students(&["Anna", "Ben"]), &students(&["Clara"]))
                .is_ok()
        );
    }

    #[test]
    fn overlapping_students_are_reported_by_name() {
        let err = check_no_duplicate_students(
            &students(&["Anna", "Ben", "Clara"]),
            &students(&["Ben", "Clara", "Dilan"]),
        )
        .unwrap_err();
        assert_matches!(
            err,
            CoreError::DuplicateStudent { names } if names == vec!["Ben".to_string(), "Clara".to_string()]
        );
    }

    #[test]
    fn empty_existing_booking_never_conflicts() {
        assert!(check_no_duplicate_students(&students(&["Anna"]), &[]).is_ok());
    }
}
