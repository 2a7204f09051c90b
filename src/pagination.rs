use serde::Serialize;

use crate::domain::page::PageMetadata;
use crate::domain::types::PageSize;

/// Pagination affordances for the contacts table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    /// Builds the controls from the metadata of the latest applied response.
    pub fn new(page: usize, page_size: PageSize, metadata: &PageMetadata) -> Self {
        let total_pages = metadata.total_pages(page_size);
        Self {
            page,
            total_pages,
            previous_enabled: metadata.has_previous,
            next_enabled: metadata.has_next,
        }
    }

    /// Controls shown while loading or after a failed fetch: both disabled.
    pub fn disabled(page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page,
            total_pages,
            previous_enabled: false,
            next_enabled: false,
        }
    }

    /// Text for the page indicator, e.g. `Page 1 of 3`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}
