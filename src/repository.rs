use crate::{
    domain::{EmailSignup, Listing, ListingPatch, NewListing, Stats, SubscriberEmail},
    store::{DocumentStore, StoreError},
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

const DEALS_KEY: &str = "deals";
const EMAILS_KEY: &str = "emails";

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to persist `{key}`")]
    Storage {
        key: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("Stored `{key}` could not be read back")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode `{key}`")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Owns every listing and email signup.
///
/// Each operation reads the whole collection, changes it in memory and
/// writes it back. Plain reads never fail: a missing or unreadable collection
/// is treated as empty. Mutations refuse to run on a collection they cannot
/// decode and report every failure.
///
/// Mutations are serialized by `write_lock`, which only protects writers
/// sharing this repository. Separate processes writing to the same store can
/// still overwrite each other.
pub struct DealRepository {
    store: Arc<dyn DocumentStore>,
    write_lock: Mutex<()>,
}

impl DealRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    #[tracing::instrument(name = "Getting all active deals", skip(self))]
    pub async fn get_all_deals(&self) -> Vec<Listing> {
        self.load_deals()
            .await
            .into_iter()
            .filter(|deal| deal.is_active)
            .collect()
    }

    #[tracing::instrument(name = "Getting active deals by city", skip(self))]
    pub async fn get_deals_by_city(&self, city: &str) -> Vec<Listing> {
        let city = city.trim().to_lowercase();

        self.load_deals()
            .await
            .into_iter()
            .filter(|deal| deal.is_active && deal.city.to_lowercase() == city)
            .collect()
    }

    /// Inactive listings are returned as well.
    #[tracing::instrument(name = "Getting deal by id", skip(self))]
    pub async fn get_deal_by_id(&self, id: &str) -> Option<Listing> {
        self.load_deals().await.into_iter().find(|deal| deal.id == id)
    }

    #[tracing::instrument(
        name = "Adding a new deal",
        skip(self, new_listing),
        fields(deal_id = tracing::field::Empty)
    )]
    pub async fn add_deal(&self, new_listing: NewListing) -> Result<Listing, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut deals: Vec<Listing> = self.load_for_update(DEALS_KEY).await?;

        let id = fresh_id(&deals);
        tracing::Span::current().record("deal_id", &tracing::field::display(&id));

        let deal = Listing::create(id, new_listing, OffsetDateTime::now_utc().date());
        warn_on_suspicious_pricing(&deal);

        deals.push(deal.clone());
        self.save(DEALS_KEY, &deals).await?;

        Ok(deal)
    }

    /// `Ok(None)` when no listing has the given id.
    #[tracing::instrument(name = "Updating a deal", skip(self, patch))]
    pub async fn update_deal(
        &self,
        id: &str,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut deals: Vec<Listing> = self.load_for_update(DEALS_KEY).await?;

        let Some(deal) = deals.iter_mut().find(|deal| deal.id == id) else {
            tracing::info!("Deal not found");
            return Ok(None);
        };
        deal.apply_patch(patch);
        warn_on_suspicious_pricing(deal);
        let updated = deal.clone();

        self.save(DEALS_KEY, &deals).await?;

        Ok(Some(updated))
    }

    /// Marks the listing inactive. `Ok(false)` when no listing has the id.
    #[tracing::instrument(name = "Deleting a deal", skip(self))]
    pub async fn delete_deal(&self, id: &str) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut deals: Vec<Listing> = self.load_for_update(DEALS_KEY).await?;

        let Some(deal) = deals.iter_mut().find(|deal| deal.id == id) else {
            tracing::info!("Deal not found");
            return Ok(false);
        };
        deal.is_active = false;

        self.save(DEALS_KEY, &deals).await?;

        Ok(true)
    }

    /// Signing up twice returns the first signup untouched, city included.
    #[tracing::instrument(name = "Adding an email signup", skip(self, email))]
    pub async fn add_email(
        &self,
        email: SubscriberEmail,
        city: Option<String>,
    ) -> Result<EmailSignup, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut emails: Vec<EmailSignup> = self.load_for_update(EMAILS_KEY).await?;

        if let Some(existing) = emails.iter().find(|signup| signup.email == email.as_ref()) {
            tracing::info!("Email already signed up");
            return Ok(existing.clone());
        }

        let signup = EmailSignup::new(email, city, OffsetDateTime::now_utc());
        emails.push(signup.clone());
        self.save(EMAILS_KEY, &emails).await?;

        Ok(signup)
    }

    #[tracing::instrument(name = "Getting all email signups", skip(self))]
    pub async fn get_all_emails(&self) -> Vec<EmailSignup> {
        self.load_emails().await
    }

    #[tracing::instrument(name = "Computing stats", skip(self))]
    pub async fn get_stats(&self) -> Stats {
        let deals = self.load_deals().await;
        let emails = self.load_emails().await;

        Stats::compute(&deals, emails.len())
    }

    async fn load_deals(&self) -> Vec<Listing> {
        self.load(DEALS_KEY).await
    }

    async fn load_emails(&self) -> Vec<EmailSignup> {
        self.load(EMAILS_KEY).await
    }

    async fn load<T: DeserializeOwned>(&self, key: &'static str) -> Vec<T> {
        let value = match self.store.get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    e.cause_chain = ?e,
                    key,
                    "Failed to read stored collection, treating it as empty"
                );
                return Vec::new();
            }
        };

        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(
                e.cause_chain = ?e,
                key,
                "Stored collection is malformed, treating it as empty"
            );
            Vec::new()
        })
    }

    /// Unlike `load`, unreadable data is an error here: the caller writes the
    /// collection back, and records that failed to decode would be lost.
    async fn load_for_update<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Vec<T>, RepositoryError> {
        let value = self
            .store
            .get(key)
            .await
            .map_err(|source| RepositoryError::Storage { key, source })?;

        match value {
            Some(value) => serde_json::from_value(value)
                .map_err(|source| RepositoryError::Malformed { key, source }),
            None => Ok(Vec::new()),
        }
    }

    async fn save<T: Serialize>(
        &self,
        key: &'static str,
        items: &[T],
    ) -> Result<(), RepositoryError> {
        let value =
            serde_json::to_value(items).map_err(|source| RepositoryError::Encode { key, source })?;

        self.store
            .set(key, value)
            .await
            .map_err(|source| RepositoryError::Storage { key, source })
    }
}

fn fresh_id(deals: &[Listing]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if deals.iter().all(|deal| deal.id != id) {
            return id;
        }
    }
}

fn warn_on_suspicious_pricing(deal: &Listing) {
    if deal.has_suspicious_pricing() {
        tracing::warn!(
            deal_id = %deal.id,
            effective_rent = deal.effective_rent,
            "Deal description promises a free period at least as long as the lease"
        );
    }
}
