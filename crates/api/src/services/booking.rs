//! Booking orchestration: the guard sequence plus persistence and the
//! best-effort side effects (calendar, notification, email, audit).

use chrono::Local;
use sportoase_core::booking::{
    check_capacity, check_no_duplicate_students, check_not_blocked, check_slot_bookable,
    check_slot_free, validate_request,
};
use sportoase_core::error::CoreError;
use sportoase_core::offers;
use sportoase_core::types::DbId;
use sportoase_core::week;
use sportoase_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use sportoase_db::models::notification::TYPE_NEW_BOOKING;
use sportoase_db::repositories::{
    BlockedSlotRepo, BookingRepo, FixedOfferRepo, NotificationRepo, UserRepo,
};
use sportoase_db::repositories::booking_repo::NewBooking;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::audit;
use crate::state::AppState;

/// Entity type name used in audit entries for bookings.
const ENTITY_BOOKING: &str = "Booking";

/// Create a booking after running the full guard sequence.
///
/// Guard order (short-circuiting, one error per attempt):
/// input validation, bookability window, admin block, occupancy, capacity,
/// duplicate students. The occupancy pre-check is advisory; the unique
/// constraint on `(date, period)` decides races, surfaced as
/// `SlotAlreadyBooked` via the sqlx error classifier.
pub async fn create_booking(
    state: &AppState,
    auth: &AuthUser,
    input: CreateBooking,
) -> AppResult<Booking> {
    let requester = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Unknown user".into()))?;
    if !requester.is_active {
        return Err(CoreError::Forbidden("Account is deactivated".into()).into());
    }

    validate_request(
        &input.teacher_name,
        &input.teacher_class,
        &input.students,
        input.period,
    )?;

    let now = Local::now().naive_local();
    check_slot_bookable(now, input.date, input.period, &state.config.booking)?;

    let block = BlockedSlotRepo::find_by_slot(&state.pool, input.date, input.period).await?;
    check_not_blocked(block.as_ref().map(|b| b.reason.as_str()))?;

    let existing = BookingRepo::find_by_slot(&state.pool, input.date, input.period).await?;
    check_slot_free(existing.is_some())?;

    check_capacity(&input.students, &state.config.booking)?;

    // With the occupancy guard passed there is at most zero existing
    // bookings; kept as a safety net per the validator contract.
    let already_booked = existing.map(|b| b.students()).unwrap_or_default();
    check_no_duplicate_students(&input.students, &already_booked)?;

    let weekday = week::weekday_index(input.date)
        .ok_or_else(|| CoreError::SlotNotBookable("Weekends cannot be booked".into()))?;

    let fixed_key = FixedOfferRepo::placement_key(&state.pool, weekday, input.period).await?;
    let offer_type = offers::offer_type_for(fixed_key.is_some()).to_string();
    let offer_label = match &fixed_key {
        Some(key) => FixedOfferRepo::display_name(&state.pool, key).await?,
        None => {
            let label = input.offer_label.as_deref().map(str::trim).unwrap_or("");
            if label.is_empty() {
                return Err(CoreError::Validation(
                    "An offer label is required for free bookings".into(),
                )
                .into());
            }
            label.to_string()
        }
    };

    let booking = BookingRepo::create(
        &state.pool,
        &NewBooking {
            date: input.date,
            period: input.period,
            weekday: week::weekday_name(input.date).to_string(),
            teacher_id: requester.id,
            teacher_name: input.teacher_name,
            teacher_class: input.teacher_class,
            students: input.students,
            offer_type,
            offer_label,
        },
    )
    .await?;

    let booking = sync_calendar_event(state, booking).await;
    notify_admins(state, &booking).await;
    audit::record(
        &state.pool,
        ENTITY_BOOKING,
        booking.id,
        audit::ACTION_CREATE,
        auth,
        None,
        format!(
            "Buchung erstellt: {} am {}, Stunde {}",
            booking.offer_label,
            booking.date.format("%d.%m.%Y"),
            booking.period
        ),
    )
    .await;

    Ok(booking)
}

/// Update mutable booking fields (teacher name/class, students, label).
///
/// Deliberately does not re-run the slot guards; only ownership is checked.
pub async fn update_booking(
    state: &AppState,
    auth: &AuthUser,
    booking_id: DbId,
    input: UpdateBooking,
) -> AppResult<Booking> {
    let booking = require_owned_booking(state, auth, booking_id).await?;

    let updated = BookingRepo::update(&state.pool, booking.id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ENTITY_BOOKING,
            id: booking_id,
        })?;

    audit::record(
        &state.pool,
        ENTITY_BOOKING,
        updated.id,
        audit::ACTION_UPDATE,
        auth,
        Some(serde_json::json!({
            "teacher_name": input.teacher_name,
            "teacher_class": input.teacher_class,
            "offer_label": input.offer_label,
            "students_changed": input.students.is_some(),
        })),
        format!("Buchung #{} aktualisiert", updated.id),
    )
    .await;

    Ok(updated)
}

/// Delete a booking. Only the owning teacher or an admin may delete.
pub async fn delete_booking(state: &AppState, auth: &AuthUser, booking_id: DbId) -> AppResult<()> {
    let booking = require_owned_booking(state, auth, booking_id).await?;

    if let Some(event_id) = &booking.calendar_event_id {
        if !state.calendar.delete_event(event_id).await {
            tracing::warn!(
                booking_id = booking.id,
                event_id,
                "Failed to delete calendar event; continuing with booking deletion"
            );
        }
    }

    BookingRepo::delete(&state.pool, booking.id).await?;

    audit::record(
        &state.pool,
        ENTITY_BOOKING,
        booking.id,
        audit::ACTION_DELETE,
        auth,
        Some(serde_json::json!({
            "date": booking.date,
            "period": booking.period,
            "offer_label": booking.offer_label,
        })),
        format!(
            "Buchung gelöscht: {} am {}",
            booking.offer_label,
            booking.date.format("%d.%m.%Y")
        ),
    )
    .await;

    Ok(())
}

/// Load a booking and verify the requester owns it or is an admin.
async fn require_owned_booking(
    state: &AppState,
    auth: &AuthUser,
    booking_id: DbId,
) -> AppResult<Booking> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ENTITY_BOOKING,
            id: booking_id,
        })?;

    if booking.teacher_id != auth.user_id && !auth.is_admin() {
        return Err(CoreError::Forbidden(
            "Only the booking's teacher or an admin may modify it".into(),
        )
        .into());
    }

    Ok(booking)
}

/// Best-effort calendar sync: attach the event ID when creation succeeds,
/// keep the booking untouched when it does not.
async fn sync_calendar_event(state: &AppState, booking: Booking) -> Booking {
    let Some(event_id) = state.calendar.create_event(&booking).await else {
        return booking;
    };

    match BookingRepo::set_calendar_event_id(&state.pool, booking.id, Some(&event_id)).await {
        Ok(()) => Booking {
            calendar_event_id: Some(event_id),
            ..booking
        },
        Err(err) => {
            tracing::warn!(
                booking_id = booking.id,
                error = %err,
                "Failed to persist calendar event id"
            );
            booking
        }
    }
}

/// Best-effort notification fan-out: an inbox row for admins plus an email.
async fn notify_admins(state: &AppState, booking: &Booking) {
    let message = format!(
        "New booking: {} registered {} students for {} on {} (Period {})",
        booking.teacher_name,
        booking.students().len(),
        booking.offer_label,
        booking.date,
        booking.period
    );
    let metadata = serde_json::json!({
        "teacher_name": booking.teacher_name,
        "offer_label": booking.offer_label,
        "students_count": booking.students().len(),
        "date": booking.date,
        "period": booking.period,
    });

    if let Err(err) = NotificationRepo::create(
        &state.pool,
        booking.id,
        TYPE_NEW_BOOKING,
        &message,
        Some(&metadata),
    )
    .await
    {
        tracing::error!(booking_id = booking.id, error = %err, "Failed to create notification");
    }

    if let Some(mailer) = &state.mailer {
        if let Err(err) = mailer.send_booking_notification(booking).await {
            tracing::warn!(booking_id = booking.id, error = %err, "Failed to send booking email");
        }
    }
}
