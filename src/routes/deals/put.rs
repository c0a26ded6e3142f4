use super::DealResponse;
use crate::{
    authentication::AdminUser,
    domain::{ListingPatch, ListingPatchForm},
    repository::DealRepository,
    utils::{e500, ApiError},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

/// The id travels in the body next to the changed fields.
#[derive(Deserialize)]
pub(super) struct UpdateDealBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(flatten)]
    patch: ListingPatchForm,
}

#[tracing::instrument(
    name = "Updating a deal",
    skip(repository, body),
    fields(deal_id = tracing::field::Empty)
)]
pub(super) async fn update_deal(
    admin: AdminUser,
    State(repository): State<Arc<DealRepository>>,
    Json(body): Json<UpdateDealBody>,
) -> Result<Json<DealResponse>, ApiError> {
    let id = body
        .id
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::ValidationError("Deal ID is required".into()))?;
    tracing::Span::current().record("deal_id", &tracing::field::display(&id));

    let patch = ListingPatch::parse(body.patch).map_err(ApiError::ValidationError)?;

    repository
        .update_deal(&id, patch)
        .await
        .map_err(e500("Failed to update deal"))?
        .map(|deal| Json(DealResponse::from(deal)))
        .ok_or(ApiError::NotFound("Deal not found"))
}
