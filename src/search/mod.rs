pub mod filter;
pub mod fuzzy;
pub mod pagination;
pub mod sort;
pub mod types;

pub use filter::matches;
pub use fuzzy::is_subsequence_match;
pub use pagination::{compact_page_numbers, paginate};
pub use sort::SortKey;
pub use types::{FilterSpec, PageItem, PageResult};

use crate::models::Listing;
use tracing::debug;

/// Filter, sort and slice `listings` into one page of results.
///
/// Pure: recomputed from scratch on every call and never mutates the input.
/// An out-of-range `page` gives an empty page with correct totals.
pub fn search<'a>(
    listings: &'a [Listing],
    spec: &FilterSpec,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> PageResult<'a> {
    let mut matching: Vec<&Listing> = listings.iter().filter(|l| matches(l, spec)).collect();
    sort::sort_listings(&mut matching, sort_key);

    let total_count = matching.len();
    let sliced = paginate(&matching, page, page_size);

    debug!(
        "Search matched {} of {} listings, page {}/{} sorted by {}",
        total_count,
        listings.len(),
        page,
        sliced.total_pages,
        sort_key
    );

    PageResult {
        items: sliced.items,
        total_count,
        total_pages: sliced.total_pages,
        current_page: sliced.current_page,
    }
}
