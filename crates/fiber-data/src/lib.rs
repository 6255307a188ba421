//! Fiber Track Pro - project catalog.
//!
//! Loads the project dataset (embedded at compile time or supplied as JSON),
//! validates it and answers the lookups the dashboard views need.
//!
//! ```no_run
//! use fiber_data::Catalog;
//!
//! let catalog = Catalog::embedded()?;
//! let summary = catalog.summary();
//! println!("{} projects", summary.total_projects);
//! # Ok::<(), fiber_data::DataError>(())
//! ```

pub mod auth;
pub mod catalog;
pub mod embedded;
pub mod error;
pub mod summary;

pub use auth::{DemoAuthenticator, DemoUser};
pub use catalog::Catalog;
pub use error::{DataError, Result};
pub use summary::DashboardSummary;
