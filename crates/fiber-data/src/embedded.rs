//! Embedded demo dataset.
//!
//! The dataset is compiled into the binary with `include_str!()`, so the
//! dashboard works without any files next to it.

/// Projects, child records, map locations and demo users.
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");
