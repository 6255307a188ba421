//! Project records supplied to the dashboard.
//!
//! Field names serialize in camelCase to match the dataset files.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{LocationCategory, MilestoneStatus, ProjectStatus, ReportKind};
use crate::error::{ModelError, Result};
use crate::ids::ProjectId;

/// A fiber-optic installation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    /// Free-form place description (district, city).
    pub location: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub category: LocationCategory,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub manager: String,
}

impl Project {
    /// Check record-level constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.progress > 100 {
            return Err(ModelError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }

    pub fn area_code(&self) -> &str {
        self.id.area_code()
    }
}

/// A photo a milestone needs before it can be signed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPhoto {
    pub name: String,
    pub uploaded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMilestone {
    pub id: String,
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub required_photos: Vec<RequiredPhoto>,
}

impl ProjectMilestone {
    pub fn uploaded_photo_count(&self) -> usize {
        self.required_photos.iter().filter(|p| p.uploaded).count()
    }

    /// Returns `(uploaded, required)`.
    pub fn photo_progress(&self) -> (usize, usize) {
        (self.uploaded_photo_count(), self.required_photos.len())
    }

    /// True once every required photo has been uploaded.
    pub fn has_all_photos(&self) -> bool {
        self.required_photos.iter().all(|p| p.uploaded)
    }

    /// Names of the photos still outstanding.
    pub fn missing_photos(&self) -> impl Iterator<Item = &str> {
        self.required_photos
            .iter()
            .filter(|p| !p.uploaded)
            .map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub id: String,
    pub project_id: ProjectId,
    pub title: String,
    pub kind: ReportKind,
    pub author: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: String,
    pub project_id: ProjectId,
    pub name: String,
    /// File extension without the dot, e.g. `pdf`.
    pub file_type: String,
    pub size_bytes: u64,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ProjectDocument {
    /// Human-readable size, e.g. `2.4 MB`.
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        match self.size_bytes {
            n if n < KB => format!("{n} B"),
            n if n < MB => format!("{:.1} KB", n as f64 / KB as f64),
            n => format!("{:.1} MB", n as f64 / MB as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectActivity {
    pub id: String,
    pub project_id: ProjectId,
    pub actor: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// A point on the project map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLocation {
    pub id: String,
    pub project_id: ProjectId,
    pub name: String,
    pub location: String,
    pub status: ProjectStatus,
    /// `[latitude, longitude]` in degrees.
    pub position: (f64, f64),
    pub is_documented: bool,
    pub category: LocationCategory,
}

impl ProjectLocation {
    pub fn latitude(&self) -> f64 {
        self.position.0
    }

    pub fn longitude(&self) -> f64 {
        self.position.1
    }

    pub fn has_valid_position(&self) -> bool {
        let (lat, lon) = self.position;
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }

    pub fn area_code(&self) -> &str {
        self.project_id.area_code()
    }
}
