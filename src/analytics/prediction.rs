use crate::models::{GroupSizePrediction, SessionType, StudySession};

/// Matching group sessions needed before a prediction is computed
pub const MIN_SESSIONS_FOR_PREDICTION: usize = 3;

/// Sample count at which confidence saturates at 1.0
const CONFIDENCE_SATURATION: f64 = 5.0;

/// Returned when there is too little history
pub const COLD_START_PREDICTION: GroupSizePrediction = GroupSizePrediction {
    recommended_size: 4,
    confidence: 0.5,
};

/// Approximate group size bucket for size prediction
///
/// Differs from the attendance proxy used by the metrics: an unlinked
/// group session is treated as a pair rather than a single attendee.
#[inline]
pub fn group_size_bucket(session: &StudySession) -> u32 {
    if session.group_id.is_some() {
        4
    } else {
        2
    }
}

/// Predict the group size that has worked best for a subject
///
/// Group sessions for `subject` are bucketed by approximate size and the
/// bucket with the highest mean effectiveness wins; buckets are compared in
/// first-seen order so the earliest one wins ties. A bucket must have a
/// positive mean to win, otherwise the result is size 4 with zero
/// confidence. Confidence grows with the winning bucket's sample count.
pub fn predict_optimal_group_size(history: &[StudySession], subject: &str) -> GroupSizePrediction {
    let relevant: Vec<&StudySession> = history
        .iter()
        .filter(|s| s.session_type == SessionType::Group && s.subject == subject)
        .collect();

    if relevant.len() < MIN_SESSIONS_FOR_PREDICTION {
        return COLD_START_PREDICTION;
    }

    // (size, effectiveness samples) in first-seen order
    let mut buckets: Vec<(u32, Vec<f64>)> = Vec::new();
    for session in relevant {
        let size = group_size_bucket(session);
        match buckets.iter_mut().find(|(s, _)| *s == size) {
            Some((_, samples)) => samples.push(session.effectiveness),
            None => buckets.push((size, vec![session.effectiveness])),
        }
    }

    // Undefeated default: a bucket must beat a zero mean to be chosen
    let mut best_size = COLD_START_PREDICTION.recommended_size;
    let mut best_mean = 0.0;
    let mut best_count = 0usize;
    for (size, samples) in &buckets {
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        if mean > best_mean {
            best_size = *size;
            best_mean = mean;
            best_count = samples.len();
        }
    }

    GroupSizePrediction {
        recommended_size: best_size,
        confidence: (best_count as f64 / CONFIDENCE_SATURATION).min(1.0),
    }
}
