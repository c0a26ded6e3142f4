use super::listing_date;
use serde::Deserialize;
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

const MAX_PROPERTY_NAME_GRAPHEMES: usize = 256;
const MAX_REGULAR_RENT: i64 = 1_000_000;

/// Listing payload as submitted by the admin form, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListingForm {
    pub property_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub deal_description: String,
    pub regular_rent: Option<i64>,
    pub bedrooms: Option<u32>,
    pub listing_url: String,
    pub image_url: String,
    #[serde(with = "listing_date::option")]
    pub deal_expires_at: Option<Date>,
}

#[derive(Clone, Debug)]
pub struct NewListing {
    pub(crate) property_name: String,
    pub(crate) address: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) zip: String,
    pub(crate) deal_description: String,
    pub(crate) regular_rent: i64,
    pub(crate) bedrooms: u32,
    pub(crate) listing_url: String,
    pub(crate) image_url: String,
    pub(crate) deal_expires_at: Option<Date>,
}

impl NewListing {
    pub fn parse(form: ListingForm) -> Result<NewListing, String> {
        Ok(Self {
            property_name: parse_property_name(form.property_name)?,
            address: parse_required("address", form.address)?,
            city: parse_required("city", form.city)?,
            state: parse_required("state", form.state)?,
            zip: parse_required("zip", form.zip)?,
            deal_description: form.deal_description.trim().to_owned(),
            regular_rent: parse_regular_rent(
                form.regular_rent.ok_or("Missing required field `regular_rent`")?,
            )?,
            bedrooms: form.bedrooms.ok_or("Missing required field `bedrooms`")?,
            listing_url: form.listing_url.trim().to_owned(),
            image_url: form.image_url.trim().to_owned(),
            deal_expires_at: form.deal_expires_at,
        })
    }
}

impl TryFrom<ListingForm> for NewListing {
    type Error = String;

    fn try_from(form: ListingForm) -> Result<Self, Self::Error> {
        Self::parse(form)
    }
}

pub(super) fn parse_property_name(s: String) -> Result<String, String> {
    let name = parse_required("property_name", s)?;

    if name.graphemes(true).count() > MAX_PROPERTY_NAME_GRAPHEMES {
        Err(format!(
            "`{name}` is longer than {MAX_PROPERTY_NAME_GRAPHEMES} graphemes"
        ))
    } else {
        Ok(name)
    }
}

pub(super) fn parse_required(field: &str, s: String) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        Err(format!("Missing required field `{field}`"))
    } else {
        Ok(trimmed.to_owned())
    }
}

pub(super) fn parse_regular_rent(rent: i64) -> Result<i64, String> {
    if rent <= 0 {
        Err(format!("`regular_rent` must be positive, got {rent}"))
    } else if rent > MAX_REGULAR_RENT {
        Err(format!(
            "`regular_rent` must not exceed {MAX_REGULAR_RENT}, got {rent}"
        ))
    } else {
        Ok(rent)
    }
}
