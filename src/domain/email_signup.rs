use super::SubscriberEmail;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// A visitor's request to hear about deals, optionally for one city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailSignup {
    pub email: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub subscribed_at: OffsetDateTime,
}

impl EmailSignup {
    pub fn new(
        email: SubscriberEmail,
        city: Option<String>,
        subscribed_at: OffsetDateTime,
    ) -> Self {
        Self {
            email: email.into(),
            city: city
                .map(|c| c.trim().to_owned())
                .filter(|c| !c.is_empty()),
            subscribed_at,
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|city| !city.trim().is_empty()))
}
