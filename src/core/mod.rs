// Compatibility engine exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use filters::{common_courses, matches_filters, shared_courses};
pub use matcher::{Matcher, MatchResult};
pub use scoring::calculate_compatibility;
pub use similarity::{gpa_closeness, jaccard_percentage, overlap_percentage};
