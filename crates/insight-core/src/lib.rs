//! # insight-core
//!
//! Foundation crate for the review-insight engine.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusteringConfig, SummarizerConfig, VectorizerConfig};
pub use errors::{InsightError, InsightResult};
pub use models::{ClusterSummary, PersonaSeed, Review};
