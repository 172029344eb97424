use crate::models::Listing;
use crate::repository::memory::InMemoryListingRepository;
use crate::repository::seed::sample_listings;
use crate::repository::traits::ListingRepository;
use crate::repository::types::RepositoryError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

/// Listing store backed by a pretty-printed JSON array on disk.
///
/// The whole file is rewritten after each successful mutation.
pub struct JsonFileListingRepository {
    path: PathBuf,
    inner: InMemoryListingRepository,
    write_lock: Mutex<()>,
}

impl JsonFileListingRepository {
    /// Open the store at `path`, seeding it with sample listings if the file
    /// does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let listings = if tokio::fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check {}", path.display()))?
        {
            let json = tokio::fs::read_to_string(&path)
                .await
                .map_err(RepositoryError::from)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let listings: Vec<Listing> = serde_json::from_str(&json)
                .map_err(RepositoryError::from)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            info!("Loaded {} listings from {}", listings.len(), path.display());
            listings
        } else {
            let listings = sample_listings();
            write_listings(&path, &listings).await?;
            info!(
                "Seeded {} with {} sample listings",
                path.display(),
                listings.len()
            );
            listings
        };

        Ok(Self {
            path,
            inner: InMemoryListingRepository::with_listings(listings),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `listings` to disk, then make them the in-memory state. A failed
    /// write leaves memory untouched.
    async fn commit(&self, listings: Vec<Listing>) -> Result<()> {
        write_listings(&self.path, &listings).await?;
        self.inner.replace_all(listings).await;
        Ok(())
    }
}

async fn write_listings(path: &Path, listings: &[Listing]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(RepositoryError::from)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(listings).map_err(RepositoryError::from)?;
    tokio::fs::write(path, json)
        .await
        .map_err(RepositoryError::from)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl ListingRepository for JsonFileListingRepository {
    async fn get_all(&self) -> Result<Vec<Listing>> {
        self.inner.get_all().await
    }

    async fn get(&self, id: &str) -> Result<Option<Listing>> {
        self.inner.get(id).await
    }

    async fn add(&self, listing: Listing) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut listings = self.inner.get_all().await?;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(RepositoryError::DuplicateId(listing.id).into());
        }

        listings.push(listing);
        self.commit(listings).await
    }

    async fn remove(&self, id: &str) -> Result<Listing> {
        let _guard = self.write_lock.lock().await;
        let mut listings = self.inner.get_all().await?;
        let index = listings
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        let removed = listings.remove(index);
        self.commit(listings).await?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("listings.json");

        let repo = JsonFileListingRepository::open(&path).await.unwrap();

        assert_eq!(repo.path(), path.as_path());
        assert!(path.exists());
        assert_eq!(repo.get_all().await.unwrap(), sample_listings());
    }

    #[tokio::test]
    async fn mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let repo = JsonFileListingRepository::open(&path).await.unwrap();
        let first = sample_listings().remove(0);
        repo.remove(&first.id).await.unwrap();

        let mut added = first.clone();
        added.id = "novi-oglas".to_string();
        repo.add(added.clone()).await.unwrap();

        let reopened = JsonFileListingRepository::open(&path).await.unwrap();
        assert_eq!(reopened.get(&first.id).await.unwrap(), None);
        assert_eq!(reopened.get("novi-oglas").await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileListingRepository::open(&path).await.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<RepositoryError>(),
            Some(RepositoryError::Serde(_))
        ));
    }

    #[tokio::test]
    async fn failed_add_does_not_touch_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let repo = JsonFileListingRepository::open(&path).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(repo.add(sample_listings().remove(0)).await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let repo = JsonFileListingRepository::open(&path).await.unwrap();
        let before = repo.get_all().await.unwrap();

        // A directory in place of the file makes every write fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let mut added = sample_listings().remove(0);
        added.id = "neuspeli-oglas".to_string();
        assert!(repo.add(added).await.is_err());
        assert_eq!(repo.get("neuspeli-oglas").await.unwrap(), None);

        assert!(repo.remove("1").await.is_err());
        assert!(repo.get("1").await.unwrap().is_some());

        assert_eq!(repo.get_all().await.unwrap(), before);
    }
}
