use crate::{configuration::AdminSettings, repository::DealRepository};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<DealRepository>,
    pub admin: Arc<AdminSettings>,
}

impl FromRef<AppState> for Arc<DealRepository> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.repository)
    }
}
