use crate::models::{Currency, Listing};
use serde::{Deserialize, Serialize};

/// What the seller has filled in so far on the new-ad form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub title: String,
    pub category: String,
    pub condition: Option<String>,
    pub price: Option<f64>,
    pub currency: Currency,
    pub location: String,
    /// Extra selling points the seller wants mentioned
    pub keywords: Vec<String>,
}

impl From<&Listing> for AdDraft {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            category: listing.category.clone(),
            condition: listing.condition.clone(),
            price: Some(listing.price).filter(|p| *p > 0.0),
            currency: listing.currency,
            location: listing.location.clone(),
            keywords: Vec::new(),
        }
    }
}

/// Prompt sent to the text generation API.
pub fn build_prompt(draft: &AdDraft) -> String {
    let mut prompt = format!(
        "Napiši kratak i privlačan opis za oglas na srpskom jeziku.\n\
         Naslov: {}\nKategorija: {}\n",
        draft.title.trim(),
        draft.category.trim()
    );

    if let Some(condition) = draft.condition.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!("Stanje: {}\n", condition.trim()));
    }

    match draft.price {
        Some(price) if price > 0.0 => {
            prompt.push_str(&format!("Cena: {} {}\n", price, draft.currency));
        }
        _ => prompt.push_str("Cena: na upit\n"),
    }

    if !draft.location.trim().is_empty() {
        prompt.push_str(&format!("Lokacija: {}\n", draft.location.trim()));
    }

    let keywords: Vec<&str> = draft
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        prompt.push_str(&format!("Istakni: {}\n", keywords.join(", ")));
    }

    prompt.push_str("Opis neka ima najviše 120 reči, bez naslova i bez emotikona.");
    prompt
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if it is not blank
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.trim())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_filled_fields_only() {
        let draft = AdDraft {
            title: "VW Golf 7".to_string(),
            category: "vozila".to_string(),
            condition: Some("polovno".to_string()),
            price: Some(12_500.0),
            currency: Currency::Eur,
            location: "Novi Sad".to_string(),
            keywords: vec!["servisna knjiga".to_string(), " ".to_string()],
        };

        let prompt = build_prompt(&draft);
        assert!(prompt.contains("Naslov: VW Golf 7"));
        assert!(prompt.contains("Stanje: polovno"));
        assert!(prompt.contains("Cena: 12500 EUR"));
        assert!(prompt.contains("Lokacija: Novi Sad"));
        assert!(prompt.contains("Istakni: servisna knjiga\n"));
    }

    #[test]
    fn missing_price_is_on_request() {
        let draft = AdDraft {
            title: "Kuća".to_string(),
            ..AdDraft::default()
        };

        let prompt = build_prompt(&draft);
        assert!(prompt.contains("Cena: na upit"));
        assert!(!prompt.contains("Stanje:"));
        assert!(!prompt.contains("Lokacija:"));
        assert!(!prompt.contains("Istakni:"));
    }

    #[test]
    fn draft_from_listing_drops_price_on_request() {
        let listing = crate::repository::seed::sample_listings()
            .into_iter()
            .find(|l| l.is_price_on_request())
            .unwrap();

        let draft = AdDraft::from(&listing);
        assert_eq!(draft.title, listing.title);
        assert_eq!(draft.price, None);
        assert!(build_prompt(&draft).contains("Cena: na upit"));
    }

    #[test]
    fn request_body_has_nested_parts() {
        let request = GenerateRequest::from_prompt("zdravo".to_string());
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"parts": [{"text": "zdravo"}]}]})
        );
    }

    #[test]
    fn first_text_skips_blank_responses() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  Odličan auto.  "}]}}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("Odličan auto."));

        let empty: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "   "}]}}]
        }))
        .unwrap();
        assert_eq!(empty.first_text(), None);

        let none: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(none.first_text(), None);
    }
}
