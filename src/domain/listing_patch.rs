use super::{
    listing_date,
    new_listing::{parse_property_name, parse_regular_rent, parse_required},
};
use serde::Deserialize;
use time::Date;

/// Partial listing update as submitted by the admin form. Absent fields are
/// left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingPatchForm {
    pub property_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub deal_description: Option<String>,
    pub regular_rent: Option<i64>,
    pub bedrooms: Option<u32>,
    pub listing_url: Option<String>,
    pub image_url: Option<String>,
    /// `null` or `""` clears the expiry.
    #[serde(deserialize_with = "listing_date::option::deserialize_clearable")]
    pub deal_expires_at: Option<Option<Date>>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct ListingPatch {
    pub(crate) property_name: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) zip: Option<String>,
    pub(crate) deal_description: Option<String>,
    pub(crate) regular_rent: Option<i64>,
    pub(crate) bedrooms: Option<u32>,
    pub(crate) listing_url: Option<String>,
    pub(crate) image_url: Option<String>,
    pub(crate) deal_expires_at: Option<Option<Date>>,
    pub(crate) is_active: Option<bool>,
}

impl ListingPatch {
    pub fn parse(form: ListingPatchForm) -> Result<ListingPatch, String> {
        Ok(Self {
            property_name: form.property_name.map(parse_property_name).transpose()?,
            address: required(form.address, "address")?,
            city: required(form.city, "city")?,
            state: required(form.state, "state")?,
            zip: required(form.zip, "zip")?,
            deal_description: form.deal_description.map(|s| s.trim().to_owned()),
            regular_rent: form.regular_rent.map(parse_regular_rent).transpose()?,
            bedrooms: form.bedrooms,
            listing_url: form.listing_url.map(|s| s.trim().to_owned()),
            image_url: form.image_url.map(|s| s.trim().to_owned()),
            deal_expires_at: form.deal_expires_at,
            is_active: form.is_active,
        })
    }

    /// Whether applying this patch invalidates the stored effective rent.
    pub fn touches_pricing(&self) -> bool {
        self.regular_rent.is_some() || self.deal_description.is_some()
    }
}

impl TryFrom<ListingPatchForm> for ListingPatch {
    type Error = String;

    fn try_from(form: ListingPatchForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}

fn required(value: Option<String>, field: &str) -> Result<Option<String>, String> {
    value.map(|s| parse_required(field, s)).transpose()
}
