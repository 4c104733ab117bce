// Analytics engine exports
pub mod engine;
pub mod metrics;
pub mod prediction;
pub mod recommendations;
pub mod streak;

pub use engine::AnalyticsEngine;
pub use metrics::calculate_collaboration_metrics;
pub use prediction::predict_optimal_group_size;
pub use recommendations::generate_recommendations;
pub use streak::calculate_study_streak;
