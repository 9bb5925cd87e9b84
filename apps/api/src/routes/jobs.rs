use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::job::{JobPayload, JobPosting};
use crate::routes::{AppJson, CreatedResponse};
use crate::state::AppState;

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    AppJson(payload): AppJson<JobPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let job = payload
        .validate()
        .map_err(|missing| AppError::missing_fields("Missing required fields", &missing))?;

    let id = state.repo.create_job(job).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.repo.list_jobs().await?))
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<JobPosting>, AppError> {
    let job = state
        .repo
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}
