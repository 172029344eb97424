use crate::models::Listing;

use super::fuzzy::is_subsequence_match;
use super::types::FilterSpec;

/// Parse a price bound typed by the user. Empty, non-numeric and non-finite
/// input is no bound.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether `listing` satisfies every active criterion of `spec`.
pub fn matches(listing: &Listing, spec: &FilterSpec) -> bool {
    matches_search_term(listing, &spec.search_term)
        && matches_tag(&listing.category, &spec.category)
        && matches_location(listing, spec)
        && matches_condition(listing, &spec.condition)
        && matches_price(listing, spec)
}

fn matches_search_term(listing: &Listing, term: &str) -> bool {
    let mut words = term.split_whitespace().peekable();
    if words.peek().is_none() {
        return true;
    }

    let content = format!(
        "{} {} {}",
        listing.title, listing.description, listing.location
    )
    .to_lowercase();

    words.all(|word| is_subsequence_match(word, &content))
}

fn matches_tag(value: &str, wanted: &str) -> bool {
    wanted.is_empty() || value == wanted
}

fn matches_location(listing: &Listing, spec: &FilterSpec) -> bool {
    spec.location.is_empty() || spec.location.contains(&listing.location)
}

fn matches_condition(listing: &Listing, wanted: &str) -> bool {
    wanted.is_empty() || listing.condition.as_deref() == Some(wanted)
}

fn matches_price(listing: &Listing, spec: &FilterSpec) -> bool {
    let min = parse_price_bound(&spec.min_price);
    let max = parse_price_bound(&spec.max_price);

    if min.is_none() && max.is_none() {
        return true;
    }

    // Bounds are only meaningful in their own currency; no conversion.
    if listing.currency != spec.price_currency {
        return false;
    }

    min.map_or(true, |min| listing.price >= min) && max.map_or(true, |max| listing.price <= max)
}
