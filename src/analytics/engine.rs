use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::analytics::{
    metrics::calculate_collaboration_metrics,
    prediction::predict_optimal_group_size,
    recommendations::generate_recommendations,
    streak::calculate_study_streak,
};
use crate::models::{CollaborationMetrics, GroupSizePrediction, StudySession};
use crate::services::{CollaborationDataSource, PlaceholderCollaborationData};

/// Analytics engine - derives metrics and advice from session history
///
/// Holds only the external collaboration data source; every operation is a
/// pure function of its arguments, the source, and the anchor date.
#[derive(Clone)]
pub struct AnalyticsEngine {
    source: Arc<dyn CollaborationDataSource>,
}

impl AnalyticsEngine {
    pub fn new(source: Arc<dyn CollaborationDataSource>) -> Self {
        Self { source }
    }

    /// Metrics anchored on the current UTC date
    pub fn calculate_collaboration_metrics(
        &self,
        sessions: &[StudySession],
        student_id: &str,
    ) -> CollaborationMetrics {
        self.calculate_collaboration_metrics_at(sessions, student_id, Utc::now().date_naive())
    }

    pub fn calculate_collaboration_metrics_at(
        &self,
        sessions: &[StudySession],
        student_id: &str,
        today: NaiveDate,
    ) -> CollaborationMetrics {
        calculate_collaboration_metrics(sessions, student_id, today, self.source.as_ref())
    }

    pub fn calculate_study_streak(&self, sessions: &[StudySession], today: NaiveDate) -> u32 {
        calculate_study_streak(sessions, today)
    }

    pub fn generate_recommendations(
        &self,
        metrics: &CollaborationMetrics,
        recent_sessions: &[StudySession],
    ) -> Vec<String> {
        generate_recommendations(metrics, recent_sessions)
    }

    pub fn predict_optimal_group_size(
        &self,
        history: &[StudySession],
        subject: &str,
    ) -> GroupSizePrediction {
        predict_optimal_group_size(history, subject)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderCollaborationData::default()))
    }
}

impl std::fmt::Debug for AnalyticsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsEngine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionType;

    struct FixedLedger;

    impl CollaborationDataSource for FixedLedger {
        fn peer_rating(&self, student_id: &str) -> f64 {
            if student_id == "star" { 5.0 } else { 3.0 }
        }

        fn tutoring_sessions_given(&self, _student_id: &str) -> u32 {
            7
        }
    }

    fn session(student_id: &str, date: chrono::DateTime<Utc>) -> StudySession {
        StudySession {
            id: "s1".to_string(),
            student_id: student_id.to_string(),
            group_id: Some("g1".to_string()),
            subject: "Statistics".to_string(),
            duration: 45.0,
            date,
            session_type: SessionType::Group,
            effectiveness: 9.0,
            topics: vec![],
        }
    }

    #[test]
    fn test_engine_uses_injected_source() {
        let engine = AnalyticsEngine::new(Arc::new(FixedLedger));
        let metrics = engine.calculate_collaboration_metrics(&[], "star");

        assert_eq!(metrics.peer_rating, 5.0);
        assert_eq!(metrics.tutoring_sessions_given, 7);
    }

    #[test]
    fn test_metrics_are_deterministic() {
        let engine = AnalyticsEngine::default();
        let now = Utc::now();
        let today = now.date_naive();
        let sessions = vec![session("me", now), session("me", now), session("you", now)];

        let first = engine.calculate_collaboration_metrics_at(&sessions, "me", today);
        let second = engine.calculate_collaboration_metrics_at(&sessions, "me", today);

        assert_eq!(first, second);
        assert_eq!(first.streak_days, 1);
        assert_eq!(engine.calculate_study_streak(&sessions, today), 1);
    }
}
