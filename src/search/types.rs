use crate::models::{Currency, Listing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::pagination::compact_page_numbers;

/// Search criteria as entered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free text, split into words and fuzzy matched
    pub search_term: String,
    /// Empty means any category
    pub category: String,
    /// Empty set means any location
    pub location: BTreeSet<String>,
    /// Raw text from the price input; unparsable text is no bound
    pub min_price: String,
    pub max_price: String,
    /// Empty means any condition
    pub condition: String,
    /// Currency `min_price` and `max_price` are expressed in
    pub price_currency: Currency,
}

impl FilterSpec {
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location.insert(location.into());
        self
    }

    pub fn with_price_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_price = min.into();
        self.max_price = max.into();
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }
}

/// Entry in the compact page-number list rendered under the results
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageItem {
    Page(usize),
    /// Placeholder for skipped pages; never a navigation target
    Ellipsis,
}

impl PageItem {
    pub fn page(self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(n),
            PageItem::Ellipsis => None,
        }
    }
}

/// One page of search results plus the counts needed to render pager controls
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<'a> {
    pub items: Vec<&'a Listing>,
    /// Matches before pagination
    pub total_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl PageResult<'_> {
    pub fn page_numbers(&self) -> Vec<PageItem> {
        compact_page_numbers(self.current_page, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
