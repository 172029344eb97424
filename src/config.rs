use crate::models::Currency;
use crate::search::SortKey;
use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "listings.json";
const DEFAULT_PAGE_SIZE: usize = 9;
const DEFAULT_DESCRIPTION_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Endpoint and credentials for the ad description API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionApiConfig {
    pub url: String,
    pub api_key: String,
}

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub page_size: usize,
    pub sort: SortKey,
    /// Currency price filters are entered in
    pub currency: Currency,
    /// `None` when no API key is configured
    pub description_api: Option<DescriptionApiConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            currency: Currency::default(),
            description_api: None,
        }
    }
}

impl AppConfig {
    /// Load from process environment, including a `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("OGLASNIK_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }

        if let Some(raw) = get("OGLASNIK_PAGE_SIZE") {
            let page_size = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("OGLASNIK_PAGE_SIZE is not a number: {}", raw))?;
            if page_size == 0 {
                anyhow::bail!("OGLASNIK_PAGE_SIZE must be greater than zero");
            }
            config.page_size = page_size;
        }

        if let Some(raw) = get("OGLASNIK_SORT") {
            config.sort = raw.parse::<SortKey>().unwrap_or_default();
        }

        if let Some(raw) = get("OGLASNIK_CURRENCY") {
            config.currency = raw
                .parse::<Currency>()
                .context("Invalid OGLASNIK_CURRENCY")?;
        }

        config.description_api = get("OGLASNIK_DESCRIPTION_API_KEY").map(|api_key| {
            DescriptionApiConfig {
                url: get("OGLASNIK_DESCRIPTION_API_URL")
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION_API_URL.to_string()),
                api_key,
            }
        });

        Ok(config)
    }
}
