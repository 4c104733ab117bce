use crate::models::{CollaborationMetrics, StudySession};

pub const MORE_STUDY_HOURS: &str =
    "Consider increasing your weekly study hours to improve academic performance.";
pub const JOIN_STUDY_GROUPS: &str =
    "Join more study groups to benefit from collaborative learning.";
pub const DIVERSIFY_SUBJECTS: &str =
    "Diversify your study subjects to build a well-rounded academic foundation.";
pub const TRY_TUTORING: &str =
    "Consider peer tutoring sessions to improve understanding of challenging topics.";
pub const BUILD_CONSISTENCY: &str =
    "Build a consistent study routine to maintain momentum and improve retention.";
pub const ACTIVE_PARTICIPATION: &str =
    "Focus on active participation in study sessions to maximize learning effectiveness.";

const MIN_STUDY_HOURS: f64 = 10.0;
const MIN_GROUP_SESSIONS: u32 = 2;
const MIN_DISTINCT_SUBJECTS: usize = 3;
const TUTORING_EFFECTIVENESS_CEILING: f64 = 7.0;
const MIN_STREAK_DAYS: u32 = 7;
const MIN_EFFECTIVENESS: f64 = 6.0;

/// Generate study advice from a student's metrics
///
/// Every rule is checked independently and messages appear in rule order.
/// `_recent_sessions` is accepted for recency-window rules; none of the
/// current rules read it.
pub fn generate_recommendations(
    metrics: &CollaborationMetrics,
    _recent_sessions: &[StudySession],
) -> Vec<String> {
    let rules: [(bool, &str); 6] = [
        (metrics.total_study_hours < MIN_STUDY_HOURS, MORE_STUDY_HOURS),
        (metrics.group_sessions_attended < MIN_GROUP_SESSIONS, JOIN_STUDY_GROUPS),
        (metrics.subject_distribution.len() < MIN_DISTINCT_SUBJECTS, DIVERSIFY_SUBJECTS),
        (
            metrics.tutoring_sessions_received == 0
                && metrics.collaboration_effectiveness < TUTORING_EFFECTIVENESS_CEILING,
            TRY_TUTORING,
        ),
        (metrics.streak_days < MIN_STREAK_DAYS, BUILD_CONSISTENCY),
        (metrics.collaboration_effectiveness < MIN_EFFECTIVENESS, ACTIVE_PARTICIPATION),
    ];

    rules
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .collect()
}
