use std::collections::HashSet;

/// GPA gap at which academic closeness reaches zero
const GPA_GAP_CUTOFF: f64 = 1.0;

fn distinct(tags: &[String]) -> HashSet<&str> {
    tags.iter().map(String::as_str).collect()
}

/// Jaccard index of two tag sets as a percentage (0-100)
///
/// Returns 0 when both sets are empty.
#[inline]
pub fn jaccard_percentage(a: &[String], b: &[String]) -> f64 {
    let a = distinct(a);
    let b = distinct(b);

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64 * 100.0
}

/// Shared tags relative to the larger of the two sets, as a percentage (0-100)
///
/// A student listing many tags is never scored below what a subset match
/// against the smaller set would give. Returns 0 when both sets are empty.
#[inline]
pub fn overlap_percentage(a: &[String], b: &[String]) -> f64 {
    let a = distinct(a);
    let b = distinct(b);

    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }

    let intersection = a.intersection(&b).count();
    intersection as f64 / larger as f64 * 100.0
}

/// Academic closeness (0-100): 100 for equal GPAs, 0 once the gap reaches 1.0
#[inline]
pub fn gpa_closeness(gpa_a: f64, gpa_b: f64) -> f64 {
    let gap = (gpa_a - gpa_b).abs();
    (100.0 - gap / GPA_GAP_CUTOFF * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = tags(&["CS101", "MATH201", "PHYS150"]);
        let b = tags(&["CS101", "MATH201", "CHEM110"]);

        // 2 shared out of 4 distinct
        assert!((jaccard_percentage(&a, &b) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_jaccard_empty_sets() {
        assert_eq!(jaccard_percentage(&[], &[]), 0.0);
        assert_eq!(jaccard_percentage(&tags(&["CS101"]), &[]), 0.0);
    }

    #[test]
    fn test_jaccard_ignores_duplicates() {
        let a = tags(&["CS101", "CS101"]);
        let b = tags(&["CS101"]);
        assert!((jaccard_percentage(&a, &b) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_uses_larger_set() {
        let a = tags(&["Group Discussion"]);
        let b = tags(&["Group Discussion", "Silent Study", "Quiz Practice", "Visual Learning"]);

        assert!((overlap_percentage(&a, &b) - 25.0).abs() < 1e-9);
        assert!((overlap_percentage(&b, &a) - 25.0).abs() < 1e-9);
        assert_eq!(overlap_percentage(&[], &[]), 0.0);
    }

    #[test]
    fn test_gpa_closeness() {
        assert_eq!(gpa_closeness(3.5, 3.5), 100.0);
        assert!((gpa_closeness(3.8, 3.3) - 50.0).abs() < 1e-9);
        assert_eq!(gpa_closeness(4.0, 3.0), 0.0);
        assert_eq!(gpa_closeness(4.0, 2.0), 0.0);
    }
}
