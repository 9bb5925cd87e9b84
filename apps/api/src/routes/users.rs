use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::user::{UserPayload, UserRow};
use crate::routes::{AppJson, CreatedResponse};
use crate::state::AppState;

/// POST /api/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let user = payload
        .validate()
        .map_err(|missing| AppError::missing_fields("Missing required fields", &missing))?;

    let id = state.repo.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserRow>, AppError> {
    let user = state
        .repo
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user))
}
