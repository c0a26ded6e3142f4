use super::DealResponse;
use crate::{
    authentication::AdminUser,
    domain::{ListingForm, NewListing},
    repository::DealRepository,
    utils::{e500, ApiError},
};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

#[tracing::instrument(
    name = "Adding a deal",
    skip(repository, form),
    fields(property_name = tracing::field::Empty)
)]
pub(super) async fn add_deal(
    admin: AdminUser,
    State(repository): State<Arc<DealRepository>>,
    Json(form): Json<ListingForm>,
) -> Result<(StatusCode, Json<DealResponse>), ApiError> {
    tracing::Span::current().record(
        "property_name",
        &tracing::field::display(&form.property_name),
    );

    let new_listing = NewListing::parse(form).map_err(ApiError::ValidationError)?;

    let deal = repository
        .add_deal(new_listing)
        .await
        .map_err(e500("Failed to add deal"))?;

    Ok((StatusCode::CREATED, Json(DealResponse::from(deal))))
}
