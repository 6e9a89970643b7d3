//! Fixed-size pagination over materialized listings.

use serde::Serialize;

/// Listing page size; not user-configurable.
pub const PAGE_SIZE: usize = 10;

/// One page of an ordered listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Page<T> {
    /// Convert the page's items while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

/// Slice an ordered sequence into the requested page.
///
/// Out-of-range page numbers clamp to the nearest valid page: zero or
/// garbage becomes the first page, past-the-end becomes the last. An empty
/// sequence yields a single empty page.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * PAGE_SIZE;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}
