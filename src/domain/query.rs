//! Query state behind the contacts table.

use crate::domain::filter::FilterSet;
use crate::domain::types::{Ordering, PageSize, SearchTerm};

/// Page, size, ordering and filters currently applied to the listing.
///
/// The mutation methods are the only write path. Every change other than a
/// page step invalidates the current page index and resets it to 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    page: usize,
    page_size: PageSize,
    ordering: Ordering,
    filters: FilterSet,
    search: Option<SearchTerm>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl QueryState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            ordering: Ordering::default(),
            filters: FilterSet::new(),
            search: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// Replaces the filter set wholesale.
    pub fn replace_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
        self.page = 1;
    }

    /// Drops every filter, the search term and the custom ordering.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search = None;
        self.ordering = Ordering::default();
        self.page = 1;
    }

    pub fn set_ordering(&mut self, ordering: Ordering) {
        self.ordering = ordering;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: Option<SearchTerm>) {
        self.search = search;
        self.page = 1;
    }

    /// Moves by `delta` pages if the target stays within `[1, total_pages]`.
    ///
    /// Returns `false` and leaves the page untouched otherwise.
    pub fn step_page(&mut self, delta: isize, total_pages: usize) -> bool {
        let Some(target) = self.page.checked_add_signed(delta) else {
            return false;
        };
        if target == self.page || target < 1 || target > total_pages.max(1) {
            return false;
        }
        self.page = target;
        true
    }
}
