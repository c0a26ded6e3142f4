use crate::{
    authentication::AdminUser,
    repository::DealRepository,
    utils::{e500, ApiError},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(super) struct Parameters {
    id: Option<String>,
}

#[derive(Serialize)]
pub(super) struct DeleteResponse {
    success: bool,
}

/// Soft delete: the listing stays in storage, marked inactive.
#[tracing::instrument(name = "Deleting a deal", skip(repository))]
pub(super) async fn delete_deal(
    admin: AdminUser,
    State(repository): State<Arc<DealRepository>>,
    Query(parameters): Query<Parameters>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parameters
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::ValidationError("Deal ID is required".into()))?;

    let deleted = repository
        .delete_deal(id.trim())
        .await
        .map_err(e500("Failed to delete deal"))?;

    if deleted {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound("Deal not found"))
    }
}
