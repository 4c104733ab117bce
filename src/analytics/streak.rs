use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

use crate::models::StudySession;

/// Days walked back from the anchor; longer streaks are reported as this cap
pub const STREAK_HORIZON_DAYS: u32 = 30;

/// Count consecutive calendar days with at least one session, ending at `today`
///
/// A day without sessions on `today` itself means no active streak (0).
/// Otherwise the walk continues backwards until the first empty day or the
/// horizon is reached.
pub fn calculate_study_streak<'a>(
    sessions: impl IntoIterator<Item = &'a StudySession>,
    today: NaiveDate,
) -> u32 {
    let active_days: HashSet<NaiveDate> = sessions.into_iter().map(StudySession::day).collect();

    let mut streak = 0;
    for offset in 0..STREAK_HORIZON_DAYS {
        let day = today - Duration::days(offset as i64);
        if !active_days.contains(&day) {
            break;
        }
        streak += 1;
    }

    streak
}
