use serde::Serialize;

use crate::domain::types::PageSize;

/// Paging information reported alongside one page of results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Total number of contacts matching the query.
    pub count: usize,
    /// Whether the server reported a next page.
    pub has_next: bool,
    /// Whether the server reported a previous page.
    pub has_previous: bool,
}

impl PageMetadata {
    /// Number of pages for the given page size, never less than one.
    pub fn total_pages(&self, page_size: PageSize) -> usize {
        total_pages(self.count, page_size)
    }
}

/// `ceil(count / page_size)` with a floor of one page for empty results.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}
