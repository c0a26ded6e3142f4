mod city;
mod email_signup;
mod listing;
mod listing_date;
mod listing_patch;
mod new_listing;
pub mod query;
pub mod rent;
mod stats;
mod subscriber_email;

pub use city::city_from_slug;
pub use email_signup::EmailSignup;
pub use listing::Listing;
pub use listing_patch::{ListingPatch, ListingPatchForm};
pub use new_listing::{ListingForm, NewListing};
pub use query::{filter_deals, sort_deals, ListingFilters, SortOption};
pub use stats::Stats;
pub use subscriber_email::SubscriberEmail;

#[cfg(test)]
pub(crate) use new_listing::tests::valid_form;
