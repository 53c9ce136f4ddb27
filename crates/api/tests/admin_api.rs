//! HTTP-level integration tests for the admin endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, future_monday, get_auth, post_auth, post_json, put_json, seed_admin,
    seed_teacher,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_cannot_reach_admin_endpoints(pool: PgPool) {
    let (_, token) = seed_teacher(&pool).await;

    for uri in [
        "/api/v1/admin/bookings",
        "/api/v1/admin/blocked-slots",
        "/api/v1/admin/fixed-offers/placements",
        "/api/v1/admin/slot-names",
        "/api/v1/admin/users",
        "/api/v1/admin/notifications",
        "/api/v1/admin/audit-logs",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, uri, &token).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "uri: {uri}");
    }
}

// ---------------------------------------------------------------------------
// Blocked slots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn block_and_unblock_slot(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let date = future_monday();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/blocked-slots",
        &admin_token,
        serde_json::json!({ "date": date, "period": 1, "reason": "Wartung" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["reason"], "Wartung");
    assert_eq!(json["data"]["weekday"], "Monday");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/admin/blocked-slots/{date}/1"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Unblocking again is idempotent.
    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/admin/blocked-slots/{date}/1"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blocking_twice_returns_409(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let date = future_monday();
    let body = serde_json::json!({ "date": date, "period": 1 });

    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/admin/blocked-slots", &admin_token, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    // The default reason applies when none is given.
    assert_eq!(body_json(first).await["data"]["reason"], "Beratung");

    let app = common::build_test_app(pool);
    let second = post_json(app, "/api/v1/admin/blocked-slots", &admin_token, body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blocking_weekend_returns_400(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let saturday = future_monday() + chrono::Days::new(5);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/blocked-slots",
        &admin_token,
        serde_json::json!({ "date": saturday, "period": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blocking_an_already_booked_slot_is_allowed(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let (_, teacher_token) = seed_teacher(&pool).await;
    let date = future_monday();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/bookings",
        &teacher_token,
        serde_json::json!({
            "date": date,
            "period": 2,
            "teacher_name": "Frau Müller",
            "teacher_class": "3a",
            "offer_label": "Aktivierung",
            "students": [{ "name": "Emma K.", "class": "3a" }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/admin/blocked-slots",
        &admin_token,
        serde_json::json!({ "date": date, "period": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Fixed offers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn placements_are_seeded(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, "/api/v1/admin/fixed-offers/placements", &admin_token).await,
    )
    .await;

    assert_eq!(json["data"].as_array().unwrap().len(), 13);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_placement_replaces_cell(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    // Monday period 1 is seeded with Wochenstart Warm-Up; replace it.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/admin/fixed-offers/placements",
        &admin_token,
        serde_json::json!({ "weekday": 1, "period": 1, "offer_key": "Aktivierung" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["offer_key"], "Aktivierung");

    // Still 13 placements, not 14.
    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, "/api/v1/admin/fixed-offers/placements", &admin_token).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 13);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn placing_unknown_offer_key_returns_400(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/admin/fixed-offers/placements",
        &admin_token,
        serde_json::json!({ "weekday": 1, "period": 1, "offer_key": "Unbekannt" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clearing_placement_frees_the_cell(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        "/api/v1/admin/fixed-offers/placements/1/1",
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, "/api/v1/admin/fixed-offers/placements", &admin_token).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 12);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn renaming_unknown_offer_key_returns_400(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/admin/fixed-offers/names/Unbekannt",
        &admin_token,
        serde_json::json!({ "custom_name": "Egal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Slot names
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn slot_name_crud(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/slot-names",
        &admin_token,
        serde_json::json!({ "weekday": "Monday", "period": 1, "label": "Halle A" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/admin/slot-names/{id}"),
        &admin_token,
        serde_json::json!({ "label": "Halle B" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["label"], "Halle B");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/slot-names/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/admin/slot-names/{id}"), &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_deactivate_user(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/admin/users",
        &admin_token,
        serde_json::json!({ "username": "n.weber", "full_name": "Nora Weber" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "teacher");
    assert_eq!(json["data"]["is_active"], true);
    let id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/admin/users/{id}/deactivate"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/admin/users", &admin_token).await).await;
    let user = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == id)
        .unwrap();
    assert_eq!(user["is_active"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let body = serde_json::json!({ "username": "n.weber" });
    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/admin/users", &admin_token, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(app, "/api/v1/admin/users", &admin_token, body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_cannot_deactivate_own_account(pool: PgPool) {
    let (admin_id, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_auth(
        app,
        &format!("/api/v1/admin/users/{admin_id}/deactivate"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_teacher_cannot_book(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let (teacher_id, teacher_token) = seed_teacher(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/admin/users/{teacher_id}/deactivate"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/bookings",
        &teacher_token,
        serde_json::json!({
            "date": future_monday(),
            "period": 2,
            "teacher_name": "Frau Müller",
            "teacher_class": "3a",
            "offer_label": "Aktivierung",
            "students": [{ "name": "Emma K.", "class": "3a" }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Notifications and audit trail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_unknown_notification_returns_404(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_auth(app, "/api/v1/admin/notifications/999999/read", &admin_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn notification_read_flow(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let (_, teacher_token) = seed_teacher(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/bookings",
        &teacher_token,
        serde_json::json!({
            "date": future_monday(),
            "period": 2,
            "teacher_name": "Frau Müller",
            "teacher_class": "3a",
            "offer_label": "Aktivierung",
            "students": [{ "name": "Emma K.", "class": "3a" }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(app, "/api/v1/admin/notifications?unread_only=true", &admin_token).await,
    )
    .await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    let id = notifications[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(
        app,
        &format!("/api/v1/admin/notifications/{id}/read"),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, "/api/v1/admin/notifications/unread-count", &admin_token).await,
    )
    .await;
    assert_eq!(json["data"]["unread"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_land_in_the_audit_trail(pool: PgPool) {
    let (_, admin_token) = seed_admin(&pool).await;
    let (_, teacher_token) = seed_teacher(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/bookings",
        &teacher_token,
        serde_json::json!({
            "date": future_monday(),
            "period": 2,
            "teacher_name": "Frau Müller",
            "teacher_class": "3a",
            "offer_label": "Aktivierung",
            "students": [{ "name": "Emma K.", "class": "3a" }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(
            app,
            "/api/v1/admin/audit-logs?entity_type=Booking",
            &admin_token,
        )
        .await,
    )
    .await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["action"], "create");
    assert_eq!(entries[0]["username"], "t.mueller");

    // Filtering by another entity type excludes it.
    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(
            app,
            "/api/v1/admin/audit-logs?entity_type=SlotName",
            &admin_token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
