use crate::models::{MatchCriteria, ScoringWeights, Student};
use crate::core::similarity::{gpa_closeness, jaccard_percentage, overlap_percentage};

/// Calculate the compatibility (0-100) between two students
///
/// Scoring formula:
/// overall = (
///     common_courses * 0.35 +       # Jaccard index of course sets
///     schedule_overlap * 0.25 +     # Jaccard index of available hours
///     study_style * 0.25 +          # Shared preferences over the larger set
///     academic_level * 0.15         # GPA closeness
/// )
///
/// Every input yields a number; empty sets score 0 rather than failing.
/// The composite is clamped to [0, 100] to absorb floating point drift.
pub fn calculate_compatibility(
    a: &Student,
    b: &Student,
    weights: &ScoringWeights,
) -> MatchCriteria {
    let common_courses = jaccard_percentage(&a.courses, &b.courses);
    let schedule_overlap = jaccard_percentage(&a.available_hours, &b.available_hours);
    let study_style_compatibility = overlap_percentage(&a.study_preferences, &b.study_preferences);
    let academic_level = gpa_closeness(a.gpa, b.gpa);

    let overall = common_courses * weights.common_courses
        + schedule_overlap * weights.schedule_overlap
        + study_style_compatibility * weights.study_style
        + academic_level * weights.academic_level;

    MatchCriteria {
        common_courses,
        schedule_overlap,
        study_style_compatibility,
        academic_level,
        overall_compatibility: overall.clamp(0.0, 100.0),
    }
}
