//! Pure page math over the visible post list. No I/O, no state: the
//! controller feeds these the current counts and renders the results into
//! the snapshot.

use shared::protocol::PageLabel;

/// Largest page count rendered without ellipsis compression.
const MAX_PLAIN_PAGES: usize = 5;

/// Number of pages needed to show `visible_count` items, `page_size` per
/// page. Zero exactly when there is nothing to show. `page_size` must be
/// non-zero; that is a constant of the system, not user input.
pub fn page_count(visible_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    visible_count.div_ceil(page_size)
}

/// The slice of `items` belonging to 1-based `current_page`. Out-of-range
/// pages (including `current_page > page_count` after deletions) yield an
/// empty slice; renormalizing the page index is the caller's job.
pub fn page_items<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page-number strip for the pagination controls.
///
/// Up to [`MAX_PLAIN_PAGES`] pages are all shown. Beyond that the strip
/// always carries page 1 and page `page_count`, keeps a fixed window of
/// `current_page` and its immediate neighbors where those fall strictly
/// between the boundaries, and collapses every gap of more than one page
/// into a single ellipsis.
pub fn page_window(current_page: usize, page_count: usize) -> Vec<PageLabel> {
    if page_count <= MAX_PLAIN_PAGES {
        return (1..=page_count).map(PageLabel::Page).collect();
    }

    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = current_page.saturating_add(1).min(page_count - 1);

    let mut labels = vec![PageLabel::Page(1)];
    if window_start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    for page in window_start..=window_end {
        labels.push(PageLabel::Page(page));
    }
    if window_end < page_count - 1 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(page_count));
    labels
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
