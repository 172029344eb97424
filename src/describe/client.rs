use crate::config::DescriptionApiConfig;
use crate::describe::traits::DescriptionGenerator;
use crate::describe::types::{build_prompt, AdDraft, GenerateRequest, GenerateResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Description generator backed by a hosted text generation API
pub struct HttpDescriptionGenerator {
    client: Client,
    config: DescriptionApiConfig,
}

impl HttpDescriptionGenerator {
    pub fn new(config: DescriptionApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl DescriptionGenerator for HttpDescriptionGenerator {
    async fn generate(&self, draft: &AdDraft) -> Result<String> {
        info!("Generating description for \"{}\"", draft.title);

        let prompt = build_prompt(draft);
        debug!("Prompt is {} characters", prompt.len());

        let response = self
            .client
            .post(&self.config.url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .context("Failed to reach description API")?;

        if !response.status().is_success() {
            warn!("Description API returned status: {}", response.status());
            anyhow::bail!("Description API request failed: {}", response.status());
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("Failed to decode description API response")?;

        body.first_text()
            .map(str::to_string)
            .context("Description API returned no text")
    }
}
