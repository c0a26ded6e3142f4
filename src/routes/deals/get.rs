use super::{DealResponse, DealsResponse};
use crate::{
    domain::{city_from_slug, filter_deals, sort_deals, Listing, ListingFilters, SortOption},
    repository::DealRepository,
    utils::ApiError,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(super) struct DealsQuery {
    city: Option<String>,
    bedrooms: Option<u32>,
    #[serde(alias = "minRent")]
    min_rent: Option<i64>,
    #[serde(alias = "maxRent")]
    max_rent: Option<i64>,
    sort: Option<SortOption>,
}

impl DealsQuery {
    fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    fn filters(&self) -> ListingFilters {
        ListingFilters {
            bedrooms: self.bedrooms,
            min_rent: self.min_rent,
            max_rent: self.max_rent,
        }
    }

    /// Sorting is skipped when neither the query nor the caller picks an
    /// order, so storage order is preserved.
    fn narrow(&self, deals: Vec<Listing>, default_sort: Option<SortOption>) -> Vec<Listing> {
        let deals = filter_deals(deals, &self.filters());

        match self.sort.or(default_sort) {
            Some(sort_by) => sort_deals(deals, sort_by),
            None => deals,
        }
    }
}

#[tracing::instrument(name = "Listing deals", skip(repository))]
pub(super) async fn list_deals(
    State(repository): State<Arc<DealRepository>>,
    Query(query): Query<DealsQuery>,
) -> Json<DealsResponse> {
    let deals = match query.city() {
        Some(city) => repository.get_deals_by_city(city).await,
        None => repository.get_all_deals().await,
    };

    Json(DealsResponse {
        deals: query.narrow(deals, None),
    })
}

#[tracing::instrument(name = "Getting a deal", skip(repository))]
pub(super) async fn deal_by_id(
    State(repository): State<Arc<DealRepository>>,
    Path(id): Path<String>,
) -> Result<Json<DealResponse>, ApiError> {
    repository
        .get_deal_by_id(&id)
        .await
        .map(|deal| Json(DealResponse::from(deal)))
        .ok_or(ApiError::NotFound("Deal not found"))
}

#[derive(Serialize)]
pub(super) struct CityDealsResponse {
    city: String,
    deals: Vec<Listing>,
}

/// Deals of the city named by a slug such as `san-francisco`, best savings
/// first unless another order is requested.
#[tracing::instrument(name = "Listing deals of a city", skip(repository))]
pub(super) async fn city_deals(
    State(repository): State<Arc<DealRepository>>,
    Path(slug): Path<String>,
    Query(query): Query<DealsQuery>,
) -> Json<CityDealsResponse> {
    let city = city_from_slug(&slug);
    let deals = repository.get_deals_by_city(&city).await;

    Json(CityDealsResponse {
        deals: query.narrow(deals, Some(SortOption::default())),
        city,
    })
}
