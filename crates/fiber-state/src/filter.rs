//! Search and status filter criteria.
//!
//! [`FilterState`] only holds the criteria. List views call
//! [`FilterState::apply`] to narrow a record slice before paginating it.
//!
//! Search matching is case-insensitive: both the query and the record text are
//! lowercased, and surrounding whitespace in the query is ignored.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use fiber_model::{
    Project, ProjectActivity, ProjectDocument, ProjectLocation, ProjectMilestone, ProjectReport,
    WorkProgress,
};
use serde::{Deserialize, Serialize};

/// Status filter offered above project and milestone lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    NotStarted,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::NotStarted,
        StatusFilter::InProgress,
        StatusFilter::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::NotStarted => "not-started",
            StatusFilter::InProgress => "in-progress",
            StatusFilter::Completed => "completed",
        }
    }

    /// Whether a record with the given progress passes this filter.
    ///
    /// Records without a progress (`None`) only pass [`StatusFilter::All`].
    pub fn accepts(&self, progress: Option<WorkProgress>) -> bool {
        match (self, progress) {
            (StatusFilter::All, _) => true,
            (StatusFilter::NotStarted, Some(WorkProgress::NotStarted)) => true,
            (StatusFilter::InProgress, Some(WorkProgress::InProgress)) => true,
            (StatusFilter::Completed, Some(WorkProgress::Completed)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown status filter: {s}"))
    }
}

/// A record that list filters can match against.
pub trait Searchable {
    /// Text the search query is matched against.
    fn search_text(&self) -> Cow<'_, str>;

    /// Progress bucket for status filtering, if the record has one.
    fn progress(&self) -> Option<WorkProgress> {
        None
    }
}

/// Search query and status filter for a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search_query: String,
    filter_status: StatusFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filter_status(&self) -> StatusFilter {
        self.filter_status
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_filter_status(&mut self, status: StatusFilter) {
        self.filter_status = status;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when either criterion would exclude something.
    pub fn is_active(&self) -> bool {
        !self.search_query.trim().is_empty() || self.filter_status != StatusFilter::All
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.matches_with(item, &self.needle())
    }

    /// Items passing both criteria, in their original order.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let needle = self.needle();
        items
            .iter()
            .filter(|item| self.matches_with(*item, &needle))
            .collect()
    }

    fn needle(&self) -> String {
        self.search_query.trim().to_lowercase()
    }

    fn matches_with<T: Searchable + ?Sized>(&self, item: &T, needle: &str) -> bool {
        self.filter_status.accepts(item.progress())
            && (needle.is_empty() || item.search_text().to_lowercase().contains(needle))
    }
}

// =============================================================================
// RECORD IMPLEMENTATIONS
// =============================================================================

impl Searchable for Project {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {} {}", self.name, self.id, self.location))
    }

    fn progress(&self) -> Option<WorkProgress> {
        Some(self.status.progress())
    }
}

impl Searchable for ProjectMilestone {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn progress(&self) -> Option<WorkProgress> {
        Some(self.status.progress())
    }
}

impl Searchable for ProjectReport {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }
}

impl Searchable for ProjectDocument {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl Searchable for ProjectActivity {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.description)
    }
}

impl Searchable for ProjectLocation {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.name, self.project_id))
    }

    fn progress(&self) -> Option<WorkProgress> {
        Some(self.status.progress())
    }
}
