//! Study Match - compatibility scoring and study analytics
//!
//! This library provides the two engines behind study partner matching:
//! a compatibility engine that scores student pairs, ranks candidate pools
//! and forms study groups, and an analytics engine that turns session
//! history into collaboration metrics, advice, and group size predictions.

pub mod analytics;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use analytics::AnalyticsEngine;
pub use crate::core::{Matcher, calculate_compatibility};
pub use models::{CollaborationMetrics, MatchCriteria, ScoringWeights, Student, StudyGroup, StudySession};
