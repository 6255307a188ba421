//! Status and category enumerations shared by the record types.
//!
//! Project and location statuses use the Indonesian labels the field teams
//! report with; [`WorkProgress`] is the language-neutral view that status
//! filters operate on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Coarse progress bucket used by status filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkProgress {
    NotStarted,
    InProgress,
    Completed,
}

impl WorkProgress {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkProgress::NotStarted => "not-started",
            WorkProgress::InProgress => "in-progress",
            WorkProgress::Completed => "completed",
        }
    }
}

impl fmt::Display for WorkProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project (and project location) status as reported from the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Finished.
    #[serde(rename = "Selesai")]
    Completed,
    /// Running on schedule.
    #[serde(rename = "Pada Jadwal")]
    OnSchedule,
    /// Running behind schedule.
    #[serde(rename = "Terlambat")]
    Delayed,
    /// Work has not begun.
    #[serde(rename = "Belum Dimulai")]
    NotStarted,
}

impl ProjectStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Completed,
        ProjectStatus::OnSchedule,
        ProjectStatus::Delayed,
        ProjectStatus::NotStarted,
    ];

    /// Label as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Selesai",
            ProjectStatus::OnSchedule => "Pada Jadwal",
            ProjectStatus::Delayed => "Terlambat",
            ProjectStatus::NotStarted => "Belum Dimulai",
        }
    }

    /// Both on-schedule and delayed projects count as in progress.
    pub fn progress(&self) -> WorkProgress {
        match self {
            ProjectStatus::Completed => WorkProgress::Completed,
            ProjectStatus::OnSchedule | ProjectStatus::Delayed => WorkProgress::InProgress,
            ProjectStatus::NotStarted => WorkProgress::NotStarted,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.label().to_lowercase() == normalized)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "project status",
                value: s.to_string(),
            })
    }
}

/// Milestone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "Not started",
            MilestoneStatus::InProgress => "In progress",
            MilestoneStatus::Completed => "Completed",
        }
    }

    pub fn progress(&self) -> WorkProgress {
        match self {
            MilestoneStatus::NotStarted => WorkProgress::NotStarted,
            MilestoneStatus::InProgress => WorkProgress::InProgress,
            MilestoneStatus::Completed => WorkProgress::Completed,
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Network segment a location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Backbone,
    Distribution,
    Access,
    Maintenance,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 4] = [
        LocationCategory::Backbone,
        LocationCategory::Distribution,
        LocationCategory::Access,
        LocationCategory::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::Backbone => "backbone",
            LocationCategory::Distribution => "distribution",
            LocationCategory::Access => "access",
            LocationCategory::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        LocationCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownVariant {
                kind: "location category",
                value: s.to_string(),
            })
    }
}

/// Kind of report filed against a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Daily,
    Weekly,
    Inspection,
    Incident,
}

impl ReportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Daily => "Daily",
            ReportKind::Weekly => "Weekly",
            ReportKind::Inspection => "Inspection",
            ReportKind::Incident => "Incident",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
