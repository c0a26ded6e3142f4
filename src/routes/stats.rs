use crate::{app_state::AppState, domain::Stats, repository::DealRepository};
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(stats))
}

#[tracing::instrument(name = "Getting stats", skip(repository))]
async fn stats(State(repository): State<Arc<DealRepository>>) -> Json<Stats> {
    Json(repository.get_stats().await)
}
