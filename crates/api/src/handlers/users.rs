//! Handlers for the `/admin/users` resource.
//!
//! Accounts are provisioned here; authentication itself happens against the
//! external SSO, which issues the tokens this service validates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sportoase_core::error::CoreError;
use sportoase_core::roles::{ROLE_ADMIN, ROLE_TEACHER};
use sportoase_core::types::DbId;
use sportoase_db::models::user::CreateUser;
use sportoase_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::services::audit;
use crate::state::AppState;

/// Entity type name used in audit entries for users.
const ENTITY_USER: &str = "User";

/// GET /api/v1/admin/users
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(serde_json::json!({ "data": users })))
}

/// POST /api/v1/admin/users
///
/// Provision an account. Duplicate usernames are a 409 via
/// `uq_users_username`.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    if input.username.trim().is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()).into());
    }
    if let Some(role) = input.role.as_deref() {
        if role != ROLE_TEACHER && role != ROLE_ADMIN {
            return Err(CoreError::Validation(format!("Invalid role: {role}")).into());
        }
    }

    let user = UserRepo::create(&state.pool, &input).await?;

    audit::record(
        &state.pool,
        ENTITY_USER,
        user.id,
        audit::ACTION_CREATE,
        &admin,
        Some(serde_json::json!({ "username": user.username, "role": user.role })),
        format!("Created user '{}'", user.username),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": user })),
    ))
}

/// POST /api/v1/admin/users/{id}/activate
pub async fn activate_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_active(&state, &admin, user_id, true).await
}

/// POST /api/v1/admin/users/{id}/deactivate
///
/// Deactivated teachers keep their history but can no longer book. Admins
/// cannot deactivate themselves.
pub async fn deactivate_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if user_id == admin.user_id {
        return Err(CoreError::Validation("Cannot deactivate your own account".into()).into());
    }
    set_active(&state, &admin, user_id, false).await
}

async fn set_active(
    state: &AppState,
    admin: &AuthUser,
    user_id: DbId,
    is_active: bool,
) -> AppResult<StatusCode> {
    let found = UserRepo::set_active(&state.pool, user_id, is_active).await?;
    if !found {
        return Err(CoreError::NotFound {
            entity: ENTITY_USER,
            id: user_id,
        }
        .into());
    }

    audit::record(
        &state.pool,
        ENTITY_USER,
        user_id,
        audit::ACTION_UPDATE,
        admin,
        Some(serde_json::json!({ "is_active": is_active })),
        format!(
            "{} user {}",
            if is_active { "Activated" } else { "Deactivated" },
            user_id
        ),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
