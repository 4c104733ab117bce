use chrono::NaiveDate;

use crate::analytics::streak::calculate_study_streak;
use crate::models::{CollaborationMetrics, SessionType, StudySession, SubjectDistribution};
use crate::services::CollaborationDataSource;

/// Approximate headcount of a group session for attendance metrics
///
/// Sessions carry no member list, so a session linked to a group counts as
/// four people and an unlinked one as the student alone.
#[inline]
pub fn attended_group_size(session: &StudySession) -> f64 {
    if session.group_id.is_some() {
        4.0
    } else {
        1.0
    }
}

/// Total minutes per subject, in the order subjects first appear
pub fn subject_distribution(sessions: &[&StudySession]) -> SubjectDistribution {
    let mut distribution = SubjectDistribution::new();
    for session in sessions {
        distribution.add(&session.subject, session.duration);
    }
    distribution
}

/// Aggregate a student's sessions into collaboration metrics
///
/// Sessions owned by other students are ignored. With no matching sessions
/// every derived field is zero and the subject distribution is empty; peer
/// rating and tutoring given always come from `source`.
pub fn calculate_collaboration_metrics(
    sessions: &[StudySession],
    student_id: &str,
    today: NaiveDate,
    source: &dyn CollaborationDataSource,
) -> CollaborationMetrics {
    let owned: Vec<&StudySession> = sessions
        .iter()
        .filter(|s| s.student_id == student_id)
        .collect();

    let total_study_hours: f64 = owned.iter().map(|s| s.duration / 60.0).sum();

    let group_sessions: Vec<&StudySession> = owned
        .iter()
        .copied()
        .filter(|s| s.session_type == SessionType::Group)
        .collect();
    let tutoring_received = owned
        .iter()
        .filter(|s| s.session_type == SessionType::Tutoring)
        .count();

    let average_group_size = if group_sessions.is_empty() {
        0.0
    } else {
        group_sessions.iter().map(|s| attended_group_size(s)).sum::<f64>()
            / group_sessions.len() as f64
    };

    let collaboration_effectiveness = if owned.is_empty() {
        0.0
    } else {
        owned.iter().map(|s| s.effectiveness).sum::<f64>() / owned.len() as f64
    };

    let streak_days = calculate_study_streak(owned.iter().copied(), today);

    CollaborationMetrics {
        total_study_hours,
        group_sessions_attended: group_sessions.len() as u32,
        tutoring_sessions_received: tutoring_received as u32,
        tutoring_sessions_given: source.tutoring_sessions_given(student_id),
        average_group_size,
        subject_distribution: subject_distribution(&owned),
        collaboration_effectiveness,
        peer_rating: source.peer_rating(student_id),
        streak_days,
    }
}
