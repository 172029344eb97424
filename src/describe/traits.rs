use crate::describe::types::AdDraft;
use anyhow::Result;
use async_trait::async_trait;

/// Writes ad copy for a listing that is being created
#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, draft: &AdDraft) -> Result<String>;
}
