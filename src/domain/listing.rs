use super::{
    listing_date,
    rent::{self, Savings, DEFAULT_LEASE_TERM_MONTHS},
    ListingPatch, NewListing,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// One move-in special tied to a property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub property_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub deal_description: String,
    pub regular_rent: i64,
    pub effective_rent: i64,
    pub bedrooms: u32,
    #[serde(default)]
    pub listing_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(with = "listing_date")]
    pub found_at: Date,
    #[serde(
        default,
        with = "listing_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deal_expires_at: Option<Date>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Listing {
    pub fn create(id: String, new_listing: NewListing, found_at: Date) -> Self {
        let mut listing = Self {
            id,
            property_name: new_listing.property_name,
            address: new_listing.address,
            city: new_listing.city,
            state: new_listing.state,
            zip: new_listing.zip,
            deal_description: new_listing.deal_description,
            regular_rent: new_listing.regular_rent,
            effective_rent: new_listing.regular_rent,
            bedrooms: new_listing.bedrooms,
            listing_url: new_listing.listing_url,
            image_url: new_listing.image_url,
            found_at,
            deal_expires_at: new_listing.deal_expires_at,
            is_active: true,
        };
        listing.recompute_effective_rent();

        listing
    }

    /// Merges the supplied fields. The effective rent is derived again only
    /// when the patch changes the rent or the deal description.
    pub fn apply_patch(&mut self, patch: ListingPatch) {
        let touches_pricing = patch.touches_pricing();

        let ListingPatch {
            property_name,
            address,
            city,
            state,
            zip,
            deal_description,
            regular_rent,
            bedrooms,
            listing_url,
            image_url,
            deal_expires_at,
            is_active,
        } = patch;

        replace(&mut self.property_name, property_name);
        replace(&mut self.address, address);
        replace(&mut self.city, city);
        replace(&mut self.state, state);
        replace(&mut self.zip, zip);
        replace(&mut self.deal_description, deal_description);
        replace(&mut self.regular_rent, regular_rent);
        replace(&mut self.bedrooms, bedrooms);
        replace(&mut self.listing_url, listing_url);
        replace(&mut self.image_url, image_url);
        replace(&mut self.is_active, is_active);
        replace(&mut self.deal_expires_at, deal_expires_at);

        if touches_pricing {
            self.recompute_effective_rent();
        }
    }

    pub fn monthly_savings(&self) -> i64 {
        self.regular_rent.saturating_sub(self.effective_rent)
    }

    pub fn savings(&self) -> Savings {
        rent::savings(
            self.regular_rent,
            self.effective_rent,
            DEFAULT_LEASE_TERM_MONTHS,
        )
    }

    /// A non-positive effective rent means the description promises more
    /// free time than the lease lasts.
    pub fn has_suspicious_pricing(&self) -> bool {
        self.effective_rent <= 0
    }

    fn recompute_effective_rent(&mut self) {
        self.effective_rent = rent::effective_rent(
            self.regular_rent,
            &self.deal_description,
            DEFAULT_LEASE_TERM_MONTHS,
        );
    }
}

fn replace<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
