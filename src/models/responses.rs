use serde::{Deserialize, Serialize};
use crate::models::domain::{CollaborationMetrics, RankedMatch, Student};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<RankedMatch>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Study group as returned to clients, tagged with an id for keying
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedGroup {
    #[serde(rename = "groupId")]
    pub group_id: uuid::Uuid,
    pub members: Vec<Student>,
    #[serde(rename = "averageCompatibility")]
    pub average_compatibility: f64,
    #[serde(rename = "commonCourses")]
    pub common_courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestGroupsResponse {
    pub groups: Vec<SuggestedGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub metrics: CollaborationMetrics,
    pub recommendations: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
