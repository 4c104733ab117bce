use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchFilters, Student, StudySession};

/// Request to score a single pair of students
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    #[serde(alias = "student_a", rename = "studentA")]
    pub student_a: Student,
    #[serde(alias = "student_b", rename = "studentB")]
    pub student_b: Student,
}

/// Request to rank a candidate pool against a target student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub target: Student,
    #[validate(length(max = 5000))]
    pub candidates: Vec<Student>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    pub filters: Option<MatchFilters>,
}

/// Request to partition a population into study groups
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestGroupsRequest {
    #[validate(length(max = 2000))]
    pub students: Vec<Student>,
    #[serde(alias = "max_group_size", rename = "maxGroupSize", default)]
    #[validate(range(min = 2, max = 50))]
    pub max_group_size: Option<usize>,
}

/// Request carrying one student's session log
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionHistoryRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "student_id", rename = "studentId")]
    pub student_id: String,
    #[serde(default)]
    pub sessions: Vec<StudySession>,
}

/// Request to predict the best group size for a subject
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GroupSizeRequest {
    #[validate(length(min = 1))]
    pub subject: String,
    #[serde(default)]
    pub history: Vec<StudySession>,
}
