use super::types::PageItem;

/// Pages shown on each side of the current page in the compact list
const SIBLING_COUNT: usize = 1;

/// First page, last page, current page and two ellipses
const MAX_VISIBLE_PAGES: usize = SIBLING_COUNT + 5;

/// A slice of an ordered collection plus page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice `ordered` into the 1-based `page` of `page_size` items.
///
/// A page outside `1..=total_pages` yields no items; the requested page
/// number is reported back unchanged.
pub fn paginate<T: Clone>(ordered: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = total_pages(ordered.len(), page_size);

    let items = match page.checked_sub(1) {
        Some(index) if page_size > 0 => {
            let start = index.saturating_mul(page_size).min(ordered.len());
            let end = start.saturating_add(page_size).min(ordered.len());
            ordered[start..end].to_vec()
        }
        _ => Vec::new(),
    };

    Page {
        items,
        total_pages,
        current_page: page,
    }
}

/// Page-number list for pager controls, with ellipses standing in for
/// skipped runs.
pub fn compact_page_numbers(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return pages(1, total_pages);
    }

    let left_sibling = current_page.saturating_sub(SIBLING_COUNT).max(1);
    let right_sibling = current_page.saturating_add(SIBLING_COUNT).min(total_pages);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling + 2 < total_pages;

    let edge_count = 3 + 2 * SIBLING_COUNT;

    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            let mut items = pages(1, edge_count);
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total_pages));
            items
        }
        (true, false) => {
            let mut items = vec![PageItem::Page(1), PageItem::Ellipsis];
            items.extend(pages(total_pages - edge_count + 1, total_pages));
            items
        }
        (true, true) => {
            let mut items = vec![PageItem::Page(1), PageItem::Ellipsis];
            items.extend(pages(left_sibling, right_sibling));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total_pages));
            items
        }
        (false, false) => pages(1, total_pages),
    }
}

fn pages(first: usize, last: usize) -> Vec<PageItem> {
    (first..=last).map(PageItem::Page).collect()
}
