//! Dashboard headline numbers.

use std::collections::BTreeMap;

use fiber_model::{LocationCategory, ProjectStatus};

/// Counts shown on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_projects: usize,
    /// Projects per status; every status is present, possibly with zero.
    pub projects_by_status: BTreeMap<ProjectStatus, usize>,
    /// Mean project progress, rounded to a whole percent.
    pub average_progress: u8,
    pub total_locations: usize,
    pub documented_locations: usize,
    /// Locations per category; every category is present, possibly with zero.
    pub locations_by_category: BTreeMap<LocationCategory, usize>,
    pub photos_uploaded: usize,
    pub photos_required: usize,
}

impl DashboardSummary {
    pub fn projects_with_status(&self, status: ProjectStatus) -> usize {
        self.projects_by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn locations_in_category(&self, category: LocationCategory) -> usize {
        self.locations_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    /// Locations still missing field documentation.
    pub fn undocumented_locations(&self) -> usize {
        self.total_locations - self.documented_locations
    }

    /// Uploaded share of required milestone photos, 0 to 100.
    ///
    /// With nothing required the photos count as complete.
    pub fn photo_percent(&self) -> u8 {
        percent(self.photos_uploaded, self.photos_required)
    }
}

pub(crate) fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    let value = (part as f64 / whole as f64 * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}
