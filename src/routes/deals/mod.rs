use crate::{
    app_state::AppState,
    domain::{rent::Savings, Listing},
};
use axum::{routing::get, Router};
use serde::Serialize;

mod delete;
mod get;
mod post;
mod put;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/deals",
            get(get::list_deals)
                .post(post::add_deal)
                .put(put::update_deal)
                .delete(delete::delete_deal),
        )
        .route("/api/deals/:id", get(get::deal_by_id))
        .route("/api/cities/:slug/deals", get(get::city_deals))
}

/// A single deal together with its savings over the default lease term.
#[derive(Serialize)]
struct DealResponse {
    savings: Savings,
    deal: Listing,
}

impl From<Listing> for DealResponse {
    fn from(deal: Listing) -> Self {
        Self {
            savings: deal.savings(),
            deal,
        }
    }
}

#[derive(Serialize)]
struct DealsResponse {
    deals: Vec<Listing>,
}
