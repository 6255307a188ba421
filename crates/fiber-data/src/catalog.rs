//! In-memory catalog of projects and their child records.
//!
//! # Loading
//!
//! [`Catalog::from_json`] parses a dataset document and validates it before
//! anything can read from it:
//! - project ids are unique and every project passes [`Project::validate`]
//! - child record ids are unique per kind
//! - every child record points at a known project
//! - every map location has a usable position
//!
//! Child records are grouped per project at load time. Activities are kept
//! newest first, everything else in dataset order.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use fiber_model::{
    LocationCategory, Project, ProjectActivity, ProjectDocument, ProjectId, ProjectLocation,
    ProjectMilestone, ProjectReport, ProjectStatus,
};
use serde::Deserialize;
use tracing::info;

use crate::auth::{DemoAuthenticator, DemoUser};
use crate::embedded::CATALOG_JSON;
use crate::error::{DataError, Result};
use crate::summary::{DashboardSummary, percent};

/// Dataset document as stored on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    projects: Vec<Project>,
    milestones: Vec<ProjectMilestone>,
    reports: Vec<ProjectReport>,
    documents: Vec<ProjectDocument>,
    activities: Vec<ProjectActivity>,
    locations: Vec<ProjectLocation>,
    users: Vec<DemoUser>,
}

/// Read-only project data for the dashboard views.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    milestones: BTreeMap<ProjectId, Vec<ProjectMilestone>>,
    reports: BTreeMap<ProjectId, Vec<ProjectReport>>,
    documents: BTreeMap<ProjectId, Vec<ProjectDocument>>,
    activities: BTreeMap<ProjectId, Vec<ProjectActivity>>,
    locations: Vec<ProjectLocation>,
    users: Vec<DemoUser>,
}

/// A child record attached to one project.
trait Owned {
    const KIND: &'static str;
    fn id(&self) -> &str;
    fn project_id(&self) -> &ProjectId;
}

macro_rules! impl_owned {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Owned for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.id
                }

                fn project_id(&self) -> &ProjectId {
                    &self.project_id
                }
            }
        )*
    };
}

impl_owned! {
    ProjectMilestone => "milestone",
    ProjectReport => "report",
    ProjectDocument => "document",
    ProjectActivity => "activity",
    ProjectLocation => "location",
}

impl Catalog {
    /// Load the dataset compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse and validate a dataset document.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or on the first record that breaks one of the
    /// checks listed in the module docs.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut known = HashSet::new();
        for project in &file.projects {
            project
                .validate()
                .map_err(|source| DataError::InvalidRecord {
                    kind: "project",
                    id: project.id.to_string(),
                    source,
                })?;
            if !known.insert(&project.id) {
                return Err(DataError::DuplicateId {
                    kind: "project",
                    id: project.id.to_string(),
                });
            }
        }

        check_children(&file.milestones, &known)?;
        check_children(&file.reports, &known)?;
        check_children(&file.documents, &known)?;
        check_children(&file.activities, &known)?;
        check_children(&file.locations, &known)?;
        for location in &file.locations {
            if !location.has_valid_position() {
                return Err(DataError::InvalidPosition {
                    id: location.id.clone(),
                    lat: location.latitude(),
                    lon: location.longitude(),
                });
            }
        }

        let mut activities = group_by_project(file.activities);
        for records in activities.values_mut() {
            records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }

        let catalog = Self {
            projects: file.projects,
            milestones: group_by_project(file.milestones),
            reports: group_by_project(file.reports),
            documents: group_by_project(file.documents),
            activities,
            locations: file.locations,
            users: file.users,
        };
        info!(
            projects = catalog.projects.len(),
            milestones = catalog.milestones.values().map(Vec::len).sum::<usize>(),
            locations = catalog.locations.len(),
            users = catalog.users.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All projects in dataset order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Look a project up by its textual id.
    ///
    /// # Errors
    ///
    /// [`DataError::Model`] for a malformed id and
    /// [`DataError::ProjectNotFound`] for a well-formed id with no project.
    pub fn find_project(&self, id: &str) -> Result<&Project> {
        let id = ProjectId::new(id)?;
        self.project(&id)
            .ok_or_else(|| DataError::ProjectNotFound(id.to_string()))
    }

    pub fn milestones_for(&self, id: &ProjectId) -> &[ProjectMilestone] {
        records_for(&self.milestones, id)
    }

    pub fn reports_for(&self, id: &ProjectId) -> &[ProjectReport] {
        records_for(&self.reports, id)
    }

    pub fn documents_for(&self, id: &ProjectId) -> &[ProjectDocument] {
        records_for(&self.documents, id)
    }

    /// Activity feed of a project, newest first.
    pub fn activities_for(&self, id: &ProjectId) -> &[ProjectActivity] {
        records_for(&self.activities, id)
    }

    /// All map locations in dataset order.
    pub fn locations(&self) -> &[ProjectLocation] {
        &self.locations
    }

    pub fn locations_for(&self, id: &ProjectId) -> Vec<&ProjectLocation> {
        self.locations
            .iter()
            .filter(|location| &location.project_id == id)
            .collect()
    }

    /// Locations whose project id carries `area_code`, compared ignoring case.
    pub fn locations_in_area(&self, area_code: &str) -> Vec<&ProjectLocation> {
        let area_code = area_code.trim();
        self.locations
            .iter()
            .filter(|location| location.area_code().eq_ignore_ascii_case(area_code))
            .collect()
    }

    pub fn locations_by_category(&self, category: LocationCategory) -> Vec<&ProjectLocation> {
        self.locations
            .iter()
            .filter(|location| location.category == category)
            .collect()
    }

    /// Distinct area codes of all projects, sorted.
    pub fn area_codes(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(Project::area_code)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sign-in backed by the dataset's demo accounts.
    pub fn authenticator(&self) -> DemoAuthenticator {
        DemoAuthenticator::new(self.users.clone())
    }

    pub fn summary(&self) -> DashboardSummary {
        let mut projects_by_status: BTreeMap<ProjectStatus, usize> =
            ProjectStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for project in &self.projects {
            *projects_by_status.entry(project.status).or_default() += 1;
        }

        let mut locations_by_category: BTreeMap<LocationCategory, usize> =
            LocationCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        for location in &self.locations {
            *locations_by_category.entry(location.category).or_default() += 1;
        }

        let (photos_uploaded, photos_required) = self
            .milestones
            .values()
            .flatten()
            .map(ProjectMilestone::photo_progress)
            .fold((0, 0), |(up, req), (u, r)| (up + u, req + r));

        let progress_total: usize = self.projects.iter().map(|p| usize::from(p.progress)).sum();
        let average_progress = if self.projects.is_empty() {
            0
        } else {
            percent(progress_total, self.projects.len() * 100)
        };

        DashboardSummary {
            total_projects: self.projects.len(),
            projects_by_status,
            average_progress,
            total_locations: self.locations.len(),
            documented_locations: self.locations.iter().filter(|l| l.is_documented).count(),
            locations_by_category,
            photos_uploaded,
            photos_required,
        }
    }
}

fn check_children<T: Owned>(records: &[T], projects: &HashSet<&ProjectId>) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DataError::DuplicateId {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
        if !projects.contains(record.project_id()) {
            return Err(DataError::UnknownProject {
                kind: T::KIND,
                id: record.id().to_string(),
                project_id: record.project_id().to_string(),
            });
        }
    }
    Ok(())
}

fn group_by_project<T: Owned>(records: Vec<T>) -> BTreeMap<ProjectId, Vec<T>> {
    let mut grouped: BTreeMap<ProjectId, Vec<T>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.project_id().clone())
            .or_default()
            .push(record);
    }
    grouped
}

fn records_for<'a, T>(grouped: &'a BTreeMap<ProjectId, Vec<T>>, id: &ProjectId) -> &'a [T] {
    grouped.get(id).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"{ "id": "FO-JKT-001", "name": "Kemang FTTH", "client": "Telkom",
        "location": "Kemang", "status": "Selesai", "progress": 100, "category": "access",
        "startDate": "2023-09-04", "targetDate": "2024-01-19", "manager": "Siti" }"#;

    fn with_project(extra: &str) -> String {
        format!(r#"{{ "projects": [{PROJECT}] {extra} }}"#)
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json(&with_project("")).unwrap();
        assert_eq!(catalog.projects().len(), 1);
        let id = &catalog.projects()[0].id;
        assert!(catalog.milestones_for(id).is_empty());
        assert!(catalog.locations().is_empty());
    }

    #[test]
    fn duplicate_project_is_rejected() {
        let json = format!(r#"{{ "projects": [{PROJECT}, {PROJECT}] }}"#);
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { kind: "project", .. }));
    }

    #[test]
    fn orphan_child_is_rejected() {
        let json = with_project(
            r#", "activities": [{ "id": "ACT-1", "projectId": "FO-BDG-009", "actor": "A",
                "description": "x", "timestamp": "2024-01-01T00:00:00Z" }]"#,
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "activity ACT-1 references unknown project FO-BDG-009"
        );
    }

    #[test]
    fn out_of_range_position_is_rejected() {
        let json = with_project(
            r#", "locations": [{ "id": "LOC-1", "projectId": "FO-JKT-001", "name": "ODC",
                "location": "Kemang", "status": "Selesai", "position": [95.0, 106.8],
                "isDocumented": true, "category": "access" }]"#,
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::InvalidPosition { .. }));
    }

    #[test]
    fn progress_over_hundred_is_rejected() {
        let json = format!(
            r#"{{ "projects": [{}] }}"#,
            PROJECT.replace(r#""progress": 100"#, r#""progress": 120"#)
        );
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::InvalidRecord { kind: "project", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(DataError::Parse(_))
        ));
    }

    #[test]
    fn find_project_distinguishes_bad_and_unknown_ids() {
        let catalog = Catalog::from_json(&with_project("")).unwrap();
        assert!(catalog.find_project("fo-jkt-001").is_err());
        assert!(matches!(
            catalog.find_project("FO-JKT-404"),
            Err(DataError::ProjectNotFound(_))
        ));
        assert_eq!(
            catalog.find_project(" FO-JKT-001 ").unwrap().name,
            "Kemang FTTH"
        );
    }

    #[test]
    fn empty_catalog_summary() {
        let summary = Catalog::default().summary();
        assert_eq!(summary.total_projects, 0);
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.photo_percent(), 100);
    }
}
