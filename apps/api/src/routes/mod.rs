pub mod health;
pub mod jobs;
pub mod users;

use axum::{
    extract::FromRequest,
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

/// `Json` extractor whose rejections use the `AppError` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Body returned by the create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/api/users", post(users::handle_create_user))
        .route("/api/users/:id", get(users::handle_get_user))
        .route(
            "/api/users/:id/recommendations",
            get(handlers::handle_user_recommendations),
        )
        .route(
            "/api/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        .route("/api/recommendations", post(handlers::handle_recommendations))
        .with_state(state)
}
