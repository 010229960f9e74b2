//! Application service layer - configuration, manifests, planning glue

pub mod config;
pub mod manifest;
pub mod service;

pub use config::{Config, OutputFormat};
pub use manifest::{load_manifest, ManifestError};
pub use service::{load_catalog, PlanningService};
