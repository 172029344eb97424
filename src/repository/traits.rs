use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Storage for listings.
///
/// The search core never talks to a repository: callers take a snapshot with
/// `get_all` and pass the plain collection in.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Snapshot of every stored listing, in insertion order
    async fn get_all(&self) -> Result<Vec<Listing>>;

    async fn get(&self, id: &str) -> Result<Option<Listing>>;

    /// Store a new listing. Fails with `RepositoryError::DuplicateId` if the id is taken.
    async fn add(&self, listing: Listing) -> Result<()>;

    /// Remove and return a listing. Fails with `RepositoryError::NotFound`.
    async fn remove(&self, id: &str) -> Result<Listing>;
}
