//! View state for the project list and project detail pages.
//!
//! # Architecture
//!
//! Each page owns the UI state it needs:
//! - [`ProjectListView`]: filter criteria plus one pagination
//! - [`ProjectDetailView`]: tab sync plus one pagination per tab
//!
//! Records are borrowed from the caller on every render, so the views never
//! hold stale copies of the data.

use fiber_model::ProjectId;
use tracing::trace;

use crate::filter::{FilterState, Searchable, StatusFilter};
use crate::pagination::Pagination;
use crate::slice::paginate;
use crate::tab::{ProjectTab, TabSync};

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a, T> {
    /// Records on the current page.
    pub items: Vec<&'a T>,
    /// Pagination after it was synced with the list length.
    pub pagination: Pagination,
}

impl<T> ListPage<'_, T> {
    /// Pager caption, e.g. `6-10 of 12`.
    pub fn caption(&self) -> String {
        self.pagination.range_label()
    }
}

// =============================================================================
// PROJECT LIST
// =============================================================================

/// Search, status filter and pagination of the project list page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListView {
    filter: FilterState,
    pagination: Pagination,
}

impl ProjectListView {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            filter: FilterState::default(),
            pagination: Pagination::with_options(0, items_per_page, 1),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    /// Update the search query and go back to the first page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_search_query(query);
        self.pagination.go_to_first_page();
    }

    /// Update the status filter and go back to the first page.
    pub fn set_filter_status(&mut self, status: StatusFilter) {
        self.filter.set_filter_status(status);
        self.pagination.go_to_first_page();
    }

    /// Filter `items`, sync the item count and cut out the current page.
    ///
    /// A page that no longer exists after filtering is clamped.
    pub fn page<'a, T: Searchable>(&mut self, items: &'a [T]) -> ListPage<'a, T> {
        let matched = self.filter.apply(items);
        self.pagination.set_total_items(matched.len());
        trace!(
            total = items.len(),
            matched = matched.len(),
            page = self.pagination.current_page(),
            "project list page"
        );
        ListPage {
            items: paginate(
                &matched,
                self.pagination.start_index(),
                self.pagination.end_index(),
            ),
            pagination: self.pagination,
        }
    }
}

// =============================================================================
// PROJECT DETAIL
// =============================================================================

/// Tab and per-tab pagination of the project detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailView {
    project_id: ProjectId,
    tabs: TabSync,
    pages: [Pagination; 4],
}

impl ProjectDetailView {
    pub fn new(project_id: ProjectId, items_per_page: usize) -> Self {
        Self {
            project_id,
            tabs: TabSync::default(),
            pages: [Pagination::with_options(0, items_per_page, 1); 4],
        }
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn active_tab(&self) -> ProjectTab {
        self.tabs.active_tab()
    }

    /// Feed the `tab` URL parameter; see [`TabSync::observe`].
    pub fn observe_tab_param(&mut self, param: Option<&str>) -> ProjectTab {
        self.tabs.observe(param)
    }

    /// Tab clicked by the user.
    pub fn select_tab(&mut self, tab: ProjectTab) {
        self.tabs.select(tab);
    }

    pub fn pagination(&self, tab: ProjectTab) -> &Pagination {
        &self.pages[tab.index()]
    }

    pub fn pagination_mut(&mut self, tab: ProjectTab) -> &mut Pagination {
        &mut self.pages[tab.index()]
    }

    /// Sync the tab's item count with `items` and cut out its current page.
    pub fn page<'a, T>(&mut self, tab: ProjectTab, items: &'a [T]) -> ListPage<'a, T> {
        let pagination = &mut self.pages[tab.index()];
        pagination.set_total_items(items.len());
        let refs: Vec<&T> = items.iter().collect();
        ListPage {
            items: paginate(&refs, pagination.start_index(), pagination.end_index()),
            pagination: *pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn search_text(&self) -> Cow<'_, str> {
            Cow::Borrowed(self.0)
        }
    }

    fn items(count: usize) -> Vec<Item> {
        const NAMES: [&str; 12] = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet", "kilo", "lima",
        ];
        NAMES[..count].iter().copied().map(Item).collect()
    }

    #[test]
    fn navigation_before_first_render_is_clamped() {
        let items = items(12);
        let mut view = ProjectListView::new(5);
        view.pagination_mut().go_to_page(2);
        let page = view.page(&items);
        assert_eq!(page.pagination.current_page(), 1);
        assert_eq!(page.caption(), "1-5 of 12");
    }

    #[test]
    fn list_navigation_after_first_render() {
        let items = items(12);
        let mut view = ProjectListView::new(5);
        view.page(&items);
        view.pagination_mut().go_to_page(2);
        let page = view.page(&items);
        let names: Vec<_> = page.items.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["foxtrot", "golf", "hotel", "india", "juliet"]);
        assert_eq!(page.caption(), "6-10 of 12");
    }

    #[test]
    fn narrowing_the_search_resets_to_first_page() {
        let items = items(12);
        let mut view = ProjectListView::new(5);
        view.page(&items);
        view.pagination_mut().go_to_last_page();
        view.set_search_query("o");
        let page = view.page(&items);
        assert_eq!(page.pagination.current_page(), 1);
        let names: Vec<_> = page.items.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["bravo", "echo", "foxtrot", "golf", "hotel"]);
        assert_eq!(page.pagination.total_items(), 6);
    }

    #[test]
    fn shrinking_data_clamps_list_page() {
        let mut view = ProjectListView::new(5);
        let all = items(12);
        view.page(&all);
        view.pagination_mut().go_to_last_page();
        let fewer = items(6);
        let page = view.page(&fewer);
        assert_eq!(page.pagination.current_page(), 2);
        assert_eq!(page.items, vec![&Item("foxtrot")]);
    }

    #[test]
    fn detail_tabs_paginate_independently() {
        let id = ProjectId::new("FO-JKT-002").unwrap();
        let mut view = ProjectDetailView::new(id, 5);
        let milestones = items(7);
        let reports = items(3);

        view.page(ProjectTab::Milestones, &milestones);
        view.pagination_mut(ProjectTab::Milestones).go_to_next_page();
        let page = view.page(ProjectTab::Milestones, &milestones);
        assert_eq!(page.items, vec![&Item("foxtrot"), &Item("golf")]);

        let page = view.page(ProjectTab::Reports, &reports);
        assert_eq!(page.pagination.current_page(), 1);
        assert_eq!(page.items.len(), 3);
        assert_eq!(view.pagination(ProjectTab::Milestones).current_page(), 2);
    }

    #[test]
    fn detail_tab_follows_parameter() {
        let id = ProjectId::new("FO-JKT-002").unwrap();
        let mut view = ProjectDetailView::new(id, 5);
        assert_eq!(view.observe_tab_param(Some("documents")), ProjectTab::Documents);
        view.select_tab(ProjectTab::Reports);
        assert_eq!(view.observe_tab_param(Some("documents")), ProjectTab::Reports);
        assert_eq!(view.observe_tab_param(Some("bogus")), ProjectTab::Reports);
        assert_eq!(view.project_id().as_str(), "FO-JKT-002");
    }
}
