//! Narrowing and ordering of listing collections.

use super::Listing;
use serde::Deserialize;
use std::cmp::Reverse;

/// Optional constraints combined with a logical AND. Rent bounds are
/// inclusive and apply to the effective rent.
///
/// `bedrooms: Some(0)` selects studios; only `None` means "any".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ListingFilters {
    pub bedrooms: Option<u32>,
    #[serde(alias = "minRent")]
    pub min_rent: Option<i64>,
    #[serde(alias = "maxRent")]
    pub max_rent: Option<i64>,
}

impl ListingFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.bedrooms.map_or(true, |b| listing.bedrooms == b)
            && self.min_rent.map_or(true, |min| listing.effective_rent >= min)
            && self.max_rent.map_or(true, |max| listing.effective_rent <= max)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Largest monthly savings first.
    #[default]
    Savings,
    /// Cheapest effective rent first.
    Rent,
    /// Soonest expiry first, open-ended deals last.
    Ending,
    /// Most recently found first.
    Newest,
}

pub fn filter_deals(deals: Vec<Listing>, filters: &ListingFilters) -> Vec<Listing> {
    if filters.is_empty() {
        return deals;
    }

    deals
        .into_iter()
        .filter(|deal| filters.matches(deal))
        .collect()
}

/// Stable: listings that compare equal keep their relative order.
pub fn sort_deals(mut deals: Vec<Listing>, sort_by: SortOption) -> Vec<Listing> {
    match sort_by {
        SortOption::Savings => deals.sort_by_key(|deal| Reverse(deal.monthly_savings())),
        SortOption::Rent => deals.sort_by_key(|deal| deal.effective_rent),
        SortOption::Ending => {
            deals.sort_by_key(|deal| (deal.deal_expires_at.is_none(), deal.deal_expires_at))
        }
        SortOption::Newest => deals.sort_by_key(|deal| Reverse(deal.found_at)),
    }

    deals
}
