//! CLI library components for `fiber-track`.

pub mod logging;
pub mod render;
pub mod settings;
