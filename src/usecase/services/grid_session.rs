use std::sync::Arc;

use crate::domain::grid::filter::{FieldLookup, FilterCoordinator, MatchRule};
use crate::domain::grid::pagination::Paginator;
use crate::domain::grid::window::{visible_pages, MAX_VISIBLE_PAGES};
use crate::domain::grid::GridError;
use crate::usecase::ports::provider::DatasetProvider;

/// One query context: a dataset, its filter coordinator, and its paginator,
/// owned together by the view that created them. User actions arrive through
/// exactly four handlers: edit criteria, commit, reset, request page.
pub struct GridSession<R> {
    dataset: Vec<R>,
    filters: FilterCoordinator,
    paginator: Paginator,
    filtered: Vec<R>,
}

impl<R: FieldLookup + Clone> GridSession<R> {
    pub fn new(provider: Arc<dyn DatasetProvider<R>>, page_size: i64) -> Result<Self, GridError> {
        let dataset = provider.fetch();
        let paginator = Paginator::new(page_size)?;
        let filters = FilterCoordinator::new();
        let filtered = filters.filtered_view(&dataset);
        Ok(Self {
            dataset,
            filters,
            paginator,
            filtered,
        })
    }

    /// Updates the pending rule for one field. Nothing is recomputed until
    /// the next commit.
    pub fn on_criteria_edit(&mut self, field: &str, rule: MatchRule) {
        self.filters.edit(field, rule);
    }

    /// Applies pending criteria, recomputes the filtered view, and returns to
    /// page 1 in one step.
    pub fn on_commit(&mut self) {
        self.filters.commit_and_reset(&mut self.paginator);
        self.filtered = self.filters.filtered_view(&self.dataset);
    }

    /// Clears all criteria and returns to page 1.
    pub fn on_reset(&mut self) {
        self.filters.reset(&mut self.paginator);
        self.filtered = self.filters.filtered_view(&self.dataset);
    }

    pub fn on_page_requested(&mut self, page: i64) {
        self.paginator.go_to_page(page, self.total_items());
    }

    pub fn current_rows(&self) -> &[R] {
        self.paginator.current_slice(&self.filtered)
    }

    /// The full filtered, unpaginated result. Export operates on this, never
    /// on the visible page alone.
    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn dataset(&self) -> &[R] {
        &self.dataset
    }

    pub fn total_items(&self) -> i64 {
        self.filtered.len() as i64
    }

    pub fn total_pages(&self) -> i64 {
        self.paginator.total_pages(self.total_items())
    }

    pub fn current_page(&self) -> i64 {
        self.paginator.current_page()
    }

    pub fn page_size(&self) -> i64 {
        self.paginator.page_size()
    }

    pub fn visible_pages(&self) -> Vec<i64> {
        visible_pages(self.current_page(), self.total_pages(), MAX_VISIBLE_PAGES)
    }

    pub fn pending_value(&self, field: &str) -> String {
        self.filters.pending_value(field).to_string()
    }
}
