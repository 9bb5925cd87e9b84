use std::sync::Arc;

use crate::matching::recommender::Recommender;
use crate::repository::Repository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users and job postings. Default: `PgRepository`.
    pub repo: Arc<dyn Repository>,
    /// Ranking pipeline built once at startup from the configured weights and policy.
    pub recommender: Arc<Recommender>,
}
