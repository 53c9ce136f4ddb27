//! The weekly view composer: one read-only pass assembling grid cells from
//! the slot catalog, fixed-offer registry, blocked slots and bookings.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use sportoase_core::booking::is_slot_bookable;
use sportoase_core::error::CoreError;
use sportoase_core::periods;
use sportoase_core::types::DbId;
use sportoase_core::week;
use sportoase_db::repositories::{BlockedSlotRepo, BookingRepo, FixedOfferRepo, SlotNameRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// One period row of the schedule header.
#[derive(Debug, Serialize)]
pub struct PeriodInfo {
    pub period: i32,
    pub start: String,
    pub end: String,
    pub label: String,
}

/// A booking as shown in the grid (no student names; those stay on the
/// teacher's own booking list).
#[derive(Debug, Serialize)]
pub struct BookedCell {
    pub id: DbId,
    pub teacher_name: String,
    pub offer_type: String,
    pub offer_label: String,
    pub student_count: usize,
}

/// One weekday × period cell of the schedule grid.
#[derive(Debug, Serialize)]
pub struct SlotCell {
    pub period: i32,
    /// Whether a new booking would pass the bookability, block and
    /// occupancy guards right now.
    pub bookable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_offer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookedCell>,
}

/// One school day's column of the grid.
#[derive(Debug, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub weekday: String,
    pub slots: Vec<SlotCell>,
}

/// The full weekly schedule response.
#[derive(Debug, Serialize)]
pub struct WeekSchedule {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub periods: Vec<PeriodInfo>,
    pub days: Vec<DaySchedule>,
    /// Module names offered for free (non-fixed) bookings; the booking form
    /// renders these as label choices.
    pub free_modules: &'static [&'static str],
}

/// Compose the schedule for the week addressed by `week_offset`
/// (0 = the week currently shown, rolling forward on Fri/Sat/Sun).
pub async fn compose_week(state: &AppState, week_offset: i64) -> AppResult<WeekSchedule> {
    if !(-week::MAX_WEEK_OFFSET..=week::MAX_WEEK_OFFSET).contains(&week_offset) {
        return Err(CoreError::Validation(format!(
            "Week offset must be between -{0} and {0}",
            week::MAX_WEEK_OFFSET
        ))
        .into());
    }

    let now = Local::now().naive_local();
    let monday = week::school_week_start(now.date(), week_offset);
    let days = week::week_days(monday);
    let friday = days[4];

    let bookings = BookingRepo::list_in_range(&state.pool, monday, friday).await?;
    let blocked = BlockedSlotRepo::list_in_range(&state.pool, monday, friday).await?;
    let placements = FixedOfferRepo::list_placements(&state.pool).await?;
    let offer_names = FixedOfferRepo::list_names(&state.pool).await?;
    let slot_names = SlotNameRepo::list(&state.pool).await?;

    // Request-scoped lookup tables; nothing here outlives the response.
    let booking_by_slot: HashMap<(NaiveDate, i32), _> = bookings
        .into_iter()
        .map(|b| ((b.date, b.period), b))
        .collect();
    let blocked_by_slot: HashMap<(NaiveDate, i32), String> = blocked
        .into_iter()
        .map(|b| ((b.date, b.period), b.reason))
        .collect();
    let custom_names: HashMap<String, String> = offer_names
        .into_iter()
        .map(|n| (n.offer_key, n.custom_name))
        .collect();
    let placement_by_cell: HashMap<(i32, i32), String> = placements
        .into_iter()
        .map(|p| ((p.weekday, p.period), p.offer_key))
        .collect();
    let slot_name_by_cell: HashMap<(String, i32), String> = slot_names
        .into_iter()
        .map(|s| ((s.weekday, s.period), s.label))
        .collect();

    let day_schedules = days
        .iter()
        .map(|date| {
            let weekday_name = week::weekday_name(*date).to_string();
            let weekday = week::weekday_index(*date).unwrap_or_default();
            let slots = periods::catalog()
                .into_iter()
                .map(|(period, _)| {
                    let booking = booking_by_slot.get(&(*date, period));
                    let blocked_reason = blocked_by_slot.get(&(*date, period)).cloned();
                    let bookable = booking.is_none()
                        && blocked_reason.is_none()
                        && is_slot_bookable(now, *date, period, &state.config.booking);
                    let fixed_offer = placement_by_cell.get(&(weekday, period)).map(|key| {
                        custom_names.get(key).cloned().unwrap_or_else(|| key.clone())
                    });

                    SlotCell {
                        period,
                        bookable,
                        fixed_offer,
                        slot_name: slot_name_by_cell
                            .get(&(weekday_name.clone(), period))
                            .cloned(),
                        blocked_reason,
                        booking: booking.map(|b| BookedCell {
                            id: b.id,
                            teacher_name: b.teacher_name.clone(),
                            offer_type: b.offer_type.clone(),
                            offer_label: b.offer_label.clone(),
                            student_count: b.students().len(),
                        }),
                    }
                })
                .collect();

            DaySchedule {
                date: *date,
                weekday: weekday_name,
                slots,
            }
        })
        .collect();

    Ok(WeekSchedule {
        week_start: monday,
        week_end: friday,
        free_modules: &sportoase_core::offers::FREE_MODULES,
        periods: periods::catalog()
            .into_iter()
            .map(|(period, times)| PeriodInfo {
                period,
                start: times.start.format("%H:%M").to_string(),
                end: times.end.format("%H:%M").to_string(),
                label: times.label(),
            })
            .collect(),
        days: day_schedules,
    })
}
