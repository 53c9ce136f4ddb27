//! The static slot catalog: start/end clock times for the six school periods.
//!
//! The table is compiled in and never mutated; admin-editable display labels
//! live in the `slot_names` table, not here.

use chrono::NaiveTime;

/// Number of bookable periods per school day.
pub const PERIOD_COUNT: i32 = 6;

/// Start and end times as `(hour, minute)` pairs, indexed by period - 1.
const TIMES: [((u32, u32), (u32, u32)); 6] = [
    ((7, 50), (8, 35)),
    ((8, 35), (9, 20)),
    ((9, 40), (10, 25)),
    ((10, 25), (11, 20)),
    ((11, 40), (12, 25)),
    ((12, 25), (13, 10)),
];

/// Start and end clock times of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodTimes {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PeriodTimes {
    /// Display label in the `"HH:MM - HH:MM"` form used by the schedule view.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Whether `period` is a valid period index (1 through 6).
pub fn is_valid_period(period: i32) -> bool {
    (1..=PERIOD_COUNT).contains(&period)
}

/// Look up the clock times for `period`, or `None` if out of range.
pub fn period_times(period: i32) -> Option<PeriodTimes> {
    if !is_valid_period(period) {
        return None;
    }
    let ((sh, sm), (eh, em)) = TIMES[(period - 1) as usize];
    Some(PeriodTimes {
        start: NaiveTime::from_hms_opt(sh, sm, 0).expect("period start time is valid"),
        end: NaiveTime::from_hms_opt(eh, em, 0).expect("period end time is valid"),
    })
}

/// The full ordered catalog as `(period, times)` pairs.
pub fn catalog() -> Vec<(i32, PeriodTimes)> {
    (1..=PERIOD_COUNT)
        .map(|p| (p, period_times(p).expect("catalog period is valid")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_ordered_periods() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        for (i, (period, _)) in catalog.iter().enumerate() {
            assert_eq!(*period, i as i32 + 1);
        }
    }

    #[test]
    fn first_period_starts_at_0750() {
        let times = period_times(1).unwrap();
        assert_eq!(times.start, NaiveTime::from_hms_opt(7, 50, 0).unwrap());
        assert_eq!(times.end, NaiveTime::from_hms_opt(8, 35, 0).unwrap());
    }

    #[test]
    fn last_period_ends_at_1310() {
        let times = period_times(6).unwrap();
        assert_eq!(times.end, NaiveTime::from_hms_opt(13, 10, 0).unwrap());
    }

    #[test]
    fn out_of_range_periods_are_rejected() {
        assert!(period_times(0).is_none());
        assert!(period_times(7).is_none());
        assert!(period_times(-1).is_none());
        assert!(!is_valid_period(0));
        assert!(is_valid_period(1));
        assert!(is_valid_period(6));
        assert!(!is_valid_period(7));
    }

    #[test]
    fn label_uses_hhmm_dash_hhmm() {
        assert_eq!(period_times(3).unwrap().label(), "09:40 - 10:25");
    }
}
