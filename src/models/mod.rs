pub mod account;

pub use account::{Account, BusinessAccount, PrivateAccount, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency a listing is priced in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Rsd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Rsd => "RSD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "RSD" => Ok(Currency::Rsd),
            other => anyhow::bail!("Unknown currency: {}", other),
        }
    }
}

/// A classified ad as stored by the listing repository.
///
/// The search core only ever reads listings; filtering and sorting work on
/// references into the caller's collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    /// `0.0` means "price on request"
    pub price: f64,
    pub currency: Currency,
    #[serde(default)]
    pub condition: Option<String>,
    pub posted_date: DateTime<Utc>,
    #[serde(default)]
    pub seller_id: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Listing {
    /// Whether the seller asked buyers to contact them for a price.
    pub fn is_price_on_request(&self) -> bool {
        self.price == 0.0
    }

    /// Human readable price, e.g. `12500 EUR` or `Cena na upit`.
    pub fn price_label(&self) -> String {
        if self.is_price_on_request() {
            "Cena na upit".to_string()
        } else {
            format!("{} {}", self.price, self.currency)
        }
    }
}
