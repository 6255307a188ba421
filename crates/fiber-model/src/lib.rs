//! Record types for Fiber Track Pro.
//!
//! These are the already-shaped records the list, detail and map views page
//! through and filter. Loading and lookups live in `fiber-data`.

pub mod enums;
pub mod error;
pub mod ids;
pub mod records;

pub use enums::{LocationCategory, MilestoneStatus, ProjectStatus, ReportKind, WorkProgress};
pub use error::{ModelError, Result};
pub use ids::ProjectId;
pub use records::{
    Project, ProjectActivity, ProjectDocument, ProjectLocation, ProjectMilestone, ProjectReport,
    RequiredPhoto,
};
