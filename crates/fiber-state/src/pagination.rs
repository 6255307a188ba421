//! Pagination state for list views.
//!
//! Pages are 1-indexed. Every mutation re-establishes
//! `1 <= current_page <= max(total_pages, 1)` before returning, so readers
//! never observe an out-of-range page.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slice::paginate;

/// Page size used by the dashboard lists.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Current page, page size and item count of a paginated list.
///
/// Deserialized values go through [`Pagination::with_options`], so a stored
/// state with a stale page or a zero page size is clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaginationRepr")]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

#[derive(Deserialize)]
struct PaginationRepr {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl From<PaginationRepr> for Pagination {
    fn from(repr: PaginationRepr) -> Self {
        Self::with_options(repr.total_items, repr.items_per_page, repr.current_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    /// Start on page 1 with the default page size.
    pub fn new(total_items: usize) -> Self {
        Self::with_options(total_items, DEFAULT_ITEMS_PER_PAGE, 1)
    }

    /// Start with an explicit page size and page.
    ///
    /// A page size of 0 becomes 1. An initial page outside the valid range is
    /// clamped, so `current_page()` may differ from `initial_page`.
    pub fn with_options(total_items: usize, items_per_page: usize, initial_page: usize) -> Self {
        let mut state = Self {
            current_page: initial_page,
            items_per_page: items_per_page.max(1),
            total_items,
        };
        state.clamp_page();
        state
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages; 0 for an empty list.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// One past the last item on the current page.
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.items_per_page).min(self.total_items)
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Change the page size and return to page 1.
    ///
    /// Values below 1 are clamped to 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            debug!("items per page 0 clamped to 1");
        }
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Replace the item count, e.g. after the underlying list was filtered.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_page();
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp_page();
    }

    pub fn go_to_first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn go_to_previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn go_to_next_page(&mut self) {
        if self.can_go_forward() {
            self.current_page += 1;
        }
    }

    pub fn go_to_last_page(&mut self) {
        self.current_page = self.total_pages().max(1);
    }

    /// Items on the current page.
    ///
    /// Bounds are recomputed from `items.len()` rather than the stored item
    /// count, so a list that changed since the last `set_total_items` still
    /// yields an in-range window. The stored state is left untouched.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let bounds = if items.len() == self.total_items {
            *self
        } else {
            Self::with_options(items.len(), self.items_per_page, self.current_page)
        };
        paginate(items, bounds.start_index(), bounds.end_index())
    }

    /// Pager caption, e.g. `6-10 of 12`.
    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            return "0-0 of 0".to_string();
        }
        format!(
            "{}-{} of {}",
            self.start_index() + 1,
            self.end_index(),
            self.total_items
        )
    }

    fn clamp_page(&mut self) {
        let max_page = self.total_pages().max(1);
        let clamped = self.current_page.clamp(1, max_page);
        if clamped != self.current_page {
            debug!(
                requested = self.current_page,
                clamped,
                total_pages = self.total_pages(),
                "page clamped into range"
            );
            self.current_page = clamped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_five() {
        let state = Pagination::new(12);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.items_per_page(), 5);
        assert_eq!(state.total_pages(), 3);
        assert_eq!((state.start_index(), state.end_index()), (0, 5));
        assert!(!state.can_go_back());
        assert!(state.can_go_forward());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut state = Pagination::new(12);
        state.go_to_last_page();
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.start_index(), 10);
        assert_eq!(state.end_index(), 12);
        assert!(!state.can_go_forward());
        assert!(state.can_go_back());
    }

    #[test]
    fn shrinking_total_clamps_current_page() {
        let mut state = Pagination::with_options(25, 5, 5);
        assert_eq!(state.current_page(), 5);
        state.set_total_items(10);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn shrinking_to_empty_lands_on_page_one() {
        let mut state = Pagination::with_options(25, 5, 4);
        state.set_total_items(0);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.current_page(), 1);
        assert_eq!((state.start_index(), state.end_index()), (0, 0));
    }

    #[test]
    fn initial_page_beyond_range_is_clamped() {
        let state = Pagination::with_options(7, 5, 9);
        assert_eq!(state.current_page(), 2);
        let state = Pagination::with_options(7, 5, 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = Pagination::with_options(40, 5, 6);
        state.set_items_per_page(10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 4);
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        let mut state = Pagination::new(3);
        state.set_items_per_page(0);
        assert_eq!(state.items_per_page(), 1);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(Pagination::with_options(3, 0, 1).items_per_page(), 1);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut state = Pagination::new(12);
        state.go_to_previous_page();
        assert_eq!(state.current_page(), 1);
        state.go_to_next_page();
        state.go_to_next_page();
        state.go_to_next_page();
        assert_eq!(state.current_page(), 3);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 3);
        state.go_to_page(2);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn next_page_on_empty_list_stays_on_page_one() {
        let mut state = Pagination::new(0);
        state.go_to_next_page();
        state.go_to_last_page();
        assert_eq!(state.current_page(), 1);
        assert!(!state.can_go_forward());
    }

    #[test]
    fn first_page_is_idempotent() {
        let mut once = Pagination::with_options(30, 5, 4);
        once.go_to_first_page();
        let mut twice = once;
        twice.go_to_first_page();
        assert_eq!(once, twice);
    }

    #[test]
    fn slice_returns_current_window() {
        let items: Vec<u32> = (1..=12).collect();
        let mut state = Pagination::new(items.len());
        state.go_to_page(2);
        assert_eq!(state.slice(&items), vec![6, 7, 8, 9, 10]);
        state.go_to_last_page();
        assert_eq!(state.slice(&items), vec![11, 12]);
    }

    #[test]
    fn slice_recomputes_bounds_from_actual_length() {
        let mut state = Pagination::new(12);
        state.go_to_last_page();
        let shorter: Vec<u32> = (1..=7).collect();
        assert_eq!(state.slice(&shorter), vec![6, 7]);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn deserialized_page_is_clamped() {
        let state: Pagination = serde_json::from_str(
            r#"{"current_page":9,"items_per_page":5,"total_items":12}"#,
        )
        .unwrap();
        assert_eq!(state.current_page(), 3);
        assert_eq!((state.start_index(), state.end_index()), (10, 12));

        let state: Pagination = serde_json::from_str(
            r#"{"current_page":0,"items_per_page":5,"total_items":12}"#,
        )
        .unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.start_index(), 0);
    }

    #[test]
    fn deserialized_zero_page_size_is_clamped() {
        let state: Pagination = serde_json::from_str(
            r#"{"current_page":1,"items_per_page":0,"total_items":3}"#,
        )
        .unwrap();
        assert_eq!(state.items_per_page(), 1);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn serialized_state_loads_back_unchanged() {
        let state = Pagination::with_options(12, 5, 2);
        let text = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<Pagination>(&text).unwrap(), state);
    }

    #[test]
    fn range_label() {
        let mut state = Pagination::new(12);
        assert_eq!(state.range_label(), "1-5 of 12");
        state.go_to_last_page();
        assert_eq!(state.range_label(), "11-12 of 12");
        assert_eq!(Pagination::new(0).range_label(), "0-0 of 0");
    }
}
