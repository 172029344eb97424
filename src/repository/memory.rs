use crate::models::Listing;
use crate::repository::traits::ListingRepository;
use crate::repository::types::RepositoryError;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// Listing store kept entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    listings: RwLock<Vec<Listing>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }

    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }

    pub(crate) async fn replace_all(&self, listings: Vec<Listing>) {
        *self.listings.write().await = listings;
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn get_all(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Listing>> {
        Ok(self
            .listings
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn add(&self, listing: Listing) -> Result<()> {
        let mut listings = self.listings.write().await;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(RepositoryError::DuplicateId(listing.id).into());
        }

        debug!("Adding listing {}", listing.id);
        listings.push(listing);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<Listing> {
        let mut listings = self.listings.write().await;
        let index = listings
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        debug!("Removing listing {}", id);
        Ok(listings.remove(index))
    }
}
