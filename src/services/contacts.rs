//! Contacts table controller.
//!
//! [`ContactsTable`] owns the query state and the last applied result. Each
//! control handler mutates the state and hands back a [`FetchTicket`]; the
//! caller performs the request and reports the outcome through
//! [`ContactsTable::complete_fetch`]. Only the most recently issued ticket is
//! applied, so a slow response can never overwrite a newer one.

use crate::domain::filter::FilterSet;
use crate::domain::page::PageMetadata;
use crate::domain::query::QueryState;
use crate::domain::types::{Ordering, PageSize, SearchTerm};
use crate::dto::contacts::{TableBody, TableView};
use crate::forms::filters::FilterForm;
use crate::models::contact::{ContactsPage, ListContactsParams};
use crate::pagination::PaginationView;
use crate::repository::ContactReader;
use crate::repository::errors::RepositoryResult;
use crate::services::ServiceResult;
use crate::services::render::{render_error, render_rows};

/// Handle for one issued listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    params: ListContactsParams,
}

impl FetchTicket {
    /// Position of the request in issue order.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Parameters to send with the request.
    pub fn params(&self) -> &ListContactsParams {
        &self.params
    }
}

#[derive(Debug)]
pub struct ContactsTable {
    query: QueryState,
    filter_form: FilterForm,
    latest_seq: u64,
    metadata: Option<PageMetadata>,
    body: TableBody,
}

impl Default for ContactsTable {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ContactsTable {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            query: QueryState::new(page_size),
            filter_form: FilterForm::default(),
            latest_seq: 0,
            metadata: None,
            body: TableBody::Loading,
        }
    }

    /// Applied query state. This is what the listing and bulk emails use.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Filter inputs as currently edited; not applied until
    /// [`ContactsTable::apply_filters`].
    pub fn filter_form(&self) -> &FilterForm {
        &self.filter_form
    }

    pub fn filter_form_mut(&mut self) -> &mut FilterForm {
        &mut self.filter_form
    }

    /// Whether the latest issued request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.body.is_loading()
    }

    /// Metadata of the latest applied successful response.
    pub fn metadata(&self) -> Option<&PageMetadata> {
        self.metadata.as_ref()
    }

    /// Total pages known from the latest applied response.
    pub fn total_pages(&self) -> usize {
        self.metadata
            .map_or(1, |metadata| metadata.total_pages(self.query.page_size()))
    }

    /// Reads the filter inputs and issues a fetch for the first page.
    ///
    /// Invalid numeric bounds leave the applied filters untouched.
    pub fn apply_filters(&mut self) -> ServiceResult<FetchTicket> {
        let filters = FilterSet::try_from(&self.filter_form).map_err(|err| {
            log::warn!("Rejected filter input: {err}");
            err
        })?;
        self.query.replace_filters(filters);
        Ok(self.begin_fetch())
    }

    /// Resets inputs, filters, search and ordering, then refetches page 1.
    pub fn clear_filters(&mut self) -> FetchTicket {
        self.filter_form = FilterForm::default();
        self.query.clear_filters();
        self.begin_fetch()
    }

    pub fn change_ordering(&mut self, key: &str) -> ServiceResult<FetchTicket> {
        let ordering = Ordering::new(key)?;
        self.query.set_ordering(ordering);
        Ok(self.begin_fetch())
    }

    pub fn change_page_size(&mut self, page_size: usize) -> ServiceResult<FetchTicket> {
        let page_size = PageSize::new(page_size)?;
        self.query.set_page_size(page_size);
        Ok(self.begin_fetch())
    }

    /// Sets or clears the free-text search term.
    pub fn change_search(&mut self, term: &str) -> FetchTicket {
        self.query.set_search(SearchTerm::new(term).ok());
        self.begin_fetch()
    }

    /// Steps `delta` pages, or returns `None` when the move is out of range.
    ///
    /// Paging is unavailable while a fetch is outstanding or the table shows
    /// an error, since the page count of the current query is unknown.
    pub fn change_page(&mut self, delta: isize) -> Option<FetchTicket> {
        if self.body.is_loading() || self.body.error_text().is_some() {
            return None;
        }
        let total_pages = self.total_pages();
        if !self.query.step_page(delta, total_pages) {
            log::debug!(
                "Ignoring page step {delta} from page {} of {total_pages}",
                self.query.page()
            );
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Issues a ticket for the current query and shows the loading state.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.body = TableBody::Loading;
        FetchTicket {
            seq: self.latest_seq,
            params: ListContactsParams::from(&self.query),
        }
    }

    /// Applies a response if it belongs to the most recently issued ticket.
    ///
    /// Returns whether the outcome was applied.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        outcome: RepositoryResult<ContactsPage>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            log::debug!(
                "Discarding stale response {} (latest is {})",
                ticket.seq,
                self.latest_seq
            );
            return false;
        }

        match outcome {
            Ok(page) => {
                self.body = render_rows(&page.contacts);
                self.metadata = Some(page.metadata);
            }
            Err(err) => {
                log::error!("Failed to load contacts: {err}");
                self.body = render_error(&err);
                self.metadata = None;
            }
        }
        true
    }

    /// Performs the request for `ticket` and applies the result.
    pub async fn fetch<R>(&mut self, repo: &R, ticket: FetchTicket) -> bool
    where
        R: ContactReader + ?Sized,
    {
        let outcome = repo.list_contacts(ticket.params()).await;
        self.complete_fetch(&ticket, outcome)
    }

    /// Initial load: fetches the current query.
    pub async fn load<R>(&mut self, repo: &R) -> bool
    where
        R: ContactReader + ?Sized,
    {
        let ticket = self.begin_fetch();
        self.fetch(repo, ticket).await
    }

    pub fn view(&self) -> TableView {
        let pagination = match (&self.body, &self.metadata) {
            (TableBody::Empty | TableBody::Populated(_), Some(metadata)) => {
                PaginationView::new(self.query.page(), self.query.page_size(), metadata)
            }
            _ => PaginationView::disabled(self.query.page(), self.total_pages()),
        };

        TableView {
            body: self.body.clone(),
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactRecord;
    use crate::domain::filter::{FilterKey, FilterValue};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn page(count: usize, rows: usize, has_next: bool, has_previous: bool) -> ContactsPage {
        ContactsPage {
            contacts: (0..rows)
                .map(|i| ContactRecord {
                    username: Some(format!("user{i}")),
                    ..Default::default()
                })
                .collect(),
            metadata: PageMetadata {
                count,
                has_next,
                has_previous,
            },
        }
    }

    fn loaded_table(count: usize) -> ContactsTable {
        let mut table = ContactsTable::default();
        let ticket = table.begin_fetch();
        assert!(table.complete_fetch(&ticket, Ok(page(count, 10, count > 10, false))));
        table
    }

    #[test]
    fn starts_in_loading_state() {
        let table = ContactsTable::default();
        assert!(table.is_loading());
        assert!(!table.view().pagination.next_enabled);
    }

    #[test]
    fn apply_filters_reads_inputs_and_resets_page() {
        let mut table = loaded_table(50);
        let ticket = table.change_page(2).unwrap();
        table.complete_fetch(&ticket, Ok(page(50, 10, true, true)));
        assert_eq!(table.query().page(), 3);

        table.filter_form_mut().company = "  Acme ".into();
        table.filter_form_mut().city = "   ".into();
        let ticket = table.apply_filters().unwrap();

        assert_eq!(table.query().page(), 1);
        assert_eq!(ticket.params().page, 1);
        assert_eq!(ticket.params().filters.len(), 1);
        assert_eq!(
            ticket.params().filters.get(FilterKey::Company),
            Some(&FilterValue::Text("Acme".into()))
        );
    }

    #[test]
    fn invalid_bound_keeps_previous_filters() {
        let mut table = loaded_table(5);
        table.filter_form_mut().company = "Acme".into();
        table.apply_filters().unwrap();

        table.filter_form_mut().total_hosting_events_max = "many".into();
        assert!(table.apply_filters().is_err());

        assert_eq!(table.query().filters().len(), 1);
    }

    #[test]
    fn clear_filters_resets_inputs_and_ordering() {
        let mut table = loaded_table(5);
        table.filter_form_mut().state = "CA".into();
        table.apply_filters().unwrap();
        table.change_ordering("-email").unwrap();

        let ticket = table.clear_filters();

        assert_eq!(table.filter_form(), &FilterForm::default());
        assert!(table.query().filters().is_empty());
        assert_eq!(ticket.params().ordering.to_string(), "username");
        assert_eq!(ticket.params().page, 1);
    }

    #[test]
    fn ordering_and_page_size_changes_reset_page() {
        let mut table = loaded_table(100);
        table.change_page(3).unwrap();

        let ticket = table.change_ordering("-date_joined").unwrap();
        assert_eq!(ticket.params().page, 1);

        table.complete_fetch(&ticket, Ok(page(100, 10, true, false)));
        table.change_page(1).unwrap();
        let ticket = table.change_page_size(25).unwrap();
        assert_eq!(ticket.params().page, 1);
        assert_eq!(ticket.params().page_size.get(), 25);
    }

    #[test]
    fn invalid_ordering_and_page_size_are_rejected() {
        let mut table = loaded_table(5);
        assert!(table.change_ordering("password").is_err());
        assert!(table.change_page_size(0).is_err());
        assert_eq!(table.query().ordering().to_string(), "username");
    }

    #[test]
    fn change_page_respects_bounds() {
        let mut table = loaded_table(25);
        assert!(table.change_page(-1).is_none());
        assert_eq!(table.query().page(), 1);

        let ticket = table.change_page(2).unwrap();
        table.complete_fetch(&ticket, Ok(page(25, 5, false, true)));
        assert_eq!(table.query().page(), 3);

        assert!(table.change_page(1).is_none());
        assert_eq!(table.query().page(), 3);
    }

    #[test]
    fn paging_waits_for_pending_fetch() {
        let mut table = loaded_table(100);
        table.filter_form_mut().company = "Tiny".into();
        let ticket = table.apply_filters().unwrap();

        assert!(!table.view().pagination.next_enabled);
        assert!(table.change_page(5).is_none());
        assert_eq!(table.query().page(), 1);

        table.complete_fetch(&ticket, Ok(page(4, 4, false, false)));
        assert!(table.change_page(1).is_none());

        let mut table = loaded_table(100);
        table.change_page(1).unwrap();
        assert!(table.change_page(1).is_none());
        assert_eq!(table.query().page(), 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut table = loaded_table(50);

        table.filter_form_mut().company = "Old".into();
        let first = table.apply_filters().unwrap();
        table.filter_form_mut().company = "New".into();
        let second = table.apply_filters().unwrap();

        assert!(table.complete_fetch(&second, Ok(page(1, 1, false, false))));
        assert!(!table.complete_fetch(&first, Ok(page(40, 10, true, false))));

        let view = table.view();
        assert_eq!(view.body.rows().len(), 1);
        assert_eq!(view.pagination.label(), "Page 1 of 1");
        assert_eq!(table.metadata().map(|m| m.count), Some(1));
    }

    #[test]
    fn stale_error_does_not_replace_newer_rows() {
        let mut table = ContactsTable::default();
        let first = table.begin_fetch();
        let second = table.begin_fetch();

        assert!(table.complete_fetch(&second, Ok(page(3, 3, false, false))));
        assert!(!table.complete_fetch(
            &first,
            Err(RepositoryError::Transport("reset".into()))
        ));

        assert_eq!(table.view().body.rows().len(), 3);
    }

    #[test]
    fn error_disables_paging() {
        let mut table = loaded_table(50);
        let ticket = table.change_page(1).unwrap();
        table.complete_fetch(
            &ticket,
            Err(RepositoryError::Server {
                status: 500,
                message: "Internal error".into(),
            }),
        );

        let view = table.view();
        assert_eq!(view.body.error_text(), Some("Error: Internal error"));
        assert!(!view.body.shows_no_results());
        assert!(!view.pagination.next_enabled);
        assert!(!view.pagination.previous_enabled);
        assert!(table.change_page(1).is_none());
    }

    #[tokio::test]
    async fn load_fetches_current_query_through_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|params| {
                params.page == 1 && params.page_size.get() == 10 && params.filters.is_empty()
            })
            .times(1)
            .returning(|_| Ok(page(0, 0, false, false)));

        let mut table = ContactsTable::default();
        assert!(table.load(&repo).await);

        let view = table.view();
        assert!(view.body.shows_no_results());
        assert_eq!(view.pagination.label(), "Page 1 of 1");
    }
}
