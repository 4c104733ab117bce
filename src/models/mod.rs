// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CollaborationMetrics, GpaRange, GpaRangeError, GroupSizePrediction, MatchCriteria, MatchFilters,
    RankedMatch, ScoringWeights, SessionType, Student, StudyGroup, StudySession, SubjectDistribution,
    WeightsError,
};
pub use requests::{
    CompatibilityRequest, FindMatchesRequest, GroupSizeRequest, SessionHistoryRequest, SuggestGroupsRequest,
};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, RecommendationsResponse, SuggestGroupsResponse,
    SuggestedGroup,
};
