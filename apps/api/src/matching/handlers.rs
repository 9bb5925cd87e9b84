//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::matching::profile::{ProfilePayload, UserProfile};
use crate::matching::recommender::Recommendation;
use crate::routes::AppJson;
use crate::state::AppState;

/// POST /api/recommendations
///
/// Ranks every stored job against an ad-hoc profile and returns the best matches.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProfilePayload>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let profile = payload
        .validate()
        .map_err(|missing| AppError::missing_fields("Invalid user profile format", &missing))?;

    Ok(Json(recommend_for(&state, &profile).await?))
}

/// GET /api/users/:id/recommendations
///
/// Same ranking, using the profile stored for a user.
pub async fn handle_user_recommendations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Recommendation>>, AppError> {
    let user = state
        .repo
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

    Ok(Json(recommend_for(&state, &user.profile()).await?))
}

async fn recommend_for(
    state: &AppState,
    profile: &UserProfile,
) -> Result<Vec<Recommendation>, AppError> {
    let jobs = state.repo.list_jobs().await?;
    let recommendations = state.recommender.recommend(profile, &jobs);

    info!(
        "Ranked {} jobs, returning {} recommendations",
        jobs.len(),
        recommendations.len()
    );
    Ok(recommendations)
}
