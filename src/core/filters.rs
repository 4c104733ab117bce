use crate::models::{MatchFilters, Student};

/// Check if a candidate passes the optional search filters
///
/// Applied before scoring. Unset filters always pass.
#[inline]
pub fn matches_filters(candidate: &Student, filters: &MatchFilters) -> bool {
    // Must be taking the subject
    if let Some(subject) = &filters.subject {
        if !candidate.courses.contains(subject) {
            return false;
        }
    }

    // Must list the study style
    if let Some(style) = &filters.study_style {
        if !candidate.study_preferences.contains(style) {
            return false;
        }
    }

    // Slot tags look like "Morning (9-12 PM)", so match the keyword loosely
    if let Some(availability) = &filters.availability {
        let keyword = availability.to_lowercase();
        if !candidate
            .available_hours
            .iter()
            .any(|slot| slot.to_lowercase().contains(&keyword))
        {
            return false;
        }
    }

    if let Some(range) = &filters.gpa_range {
        if !range.contains(candidate.gpa) {
            return false;
        }
    }

    true
}

/// Courses both students take, in the order they appear for `a`
pub fn shared_courses(a: &Student, b: &Student) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for course in &a.courses {
        if b.courses.contains(course) && !shared.contains(course) {
            shared.push(course.clone());
        }
    }
    shared
}

/// Courses taken by every member, in the order they appear for the first member
pub fn common_courses(members: &[Student]) -> Vec<String> {
    let Some((first, rest)) = members.split_first() else {
        return Vec::new();
    };

    let mut common: Vec<String> = Vec::new();
    for course in &first.courses {
        if rest.iter().all(|m| m.courses.contains(course)) && !common.contains(course) {
            common.push(course.clone());
        }
    }
    common
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GpaRange;

    fn create_test_student(id: &str, gpa: f64, courses: &[&str]) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {}", id),
            major: "Mathematics".to_string(),
            year: "Sophomore".to_string(),
            gpa,
            courses: courses.iter().map(|c| c.to_string()).collect(),
            study_preferences: vec!["Problem-Solving".to_string()],
            available_hours: vec!["Morning (9-12 PM)".to_string(), "Evening (6-9 PM)".to_string()],
            study_goals: vec![],
        }
    }

    #[test]
    fn test_no_filters_pass_everything() {
        let student = create_test_student("1", 2.1, &[]);
        assert!(matches_filters(&student, &MatchFilters::default()));
    }

    #[test]
    fn test_subject_filter() {
        let student = create_test_student("1", 3.5, &["Linear Algebra"]);
        let mut filters = MatchFilters::default();

        filters.subject = Some("Linear Algebra".to_string());
        assert!(matches_filters(&student, &filters));

        filters.subject = Some("Statistics".to_string());
        assert!(!matches_filters(&student, &filters));
    }

    #[test]
    fn test_availability_keyword_is_case_insensitive() {
        let student = create_test_student("1", 3.5, &[]);
        let mut filters = MatchFilters::default();

        filters.availability = Some("morning".to_string());
        assert!(matches_filters(&student, &filters));

        filters.availability = Some("afternoon".to_string());
        assert!(!matches_filters(&student, &filters));
    }

    #[test]
    fn test_study_style_and_gpa_filters() {
        let student = create_test_student("1", 3.2, &[]);
        let filters = MatchFilters {
            study_style: Some("Problem-Solving".to_string()),
            gpa_range: Some(GpaRange { min: 3.0, max: Some(3.5) }),
            ..MatchFilters::default()
        };
        assert!(matches_filters(&student, &filters));

        let strict = MatchFilters {
            gpa_range: Some(GpaRange { min: 3.5, max: None }),
            ..MatchFilters::default()
        };
        assert!(!matches_filters(&student, &strict));
    }

    #[test]
    fn test_shared_and_common_courses() {
        let a = create_test_student("a", 3.0, &["Calc", "Physics", "Chem"]);
        let b = create_test_student("b", 3.0, &["Chem", "Calc"]);
        let c = create_test_student("c", 3.0, &["Calc", "Bio"]);

        assert_eq!(shared_courses(&a, &b), vec!["Calc", "Chem"]);
        assert_eq!(common_courses(&[a, b, c]), vec!["Calc"]);
        assert!(common_courses(&[]).is_empty());
    }
}
