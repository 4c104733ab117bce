use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CompatibilityRequest, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    SuggestGroupsRequest, SuggestGroupsResponse, SuggestedGroup,
};
use crate::routes::AppState;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility", web::post().to(compatibility))
        .route("/matches/find", web::post().to(find_matches))
        .route("/groups/suggest", web::post().to(suggest_groups));
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Pairwise compatibility endpoint
///
/// POST /api/v1/compatibility
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    let criteria = state.matcher.compatibility(&req.student_a, &req.student_b);

    tracing::debug!(
        "Compatibility {} <-> {}: {:.2}",
        req.student_a.id,
        req.student_b.id,
        criteria.overall_compatibility
    );

    HttpResponse::Ok().json(criteria)
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "target": { "id": "string", ... },
///   "candidates": [{ "id": "string", ... }],
///   "limit": 10,
///   "filters": { "subject": "string", "studyStyle": "string", "availability": "morning", "gpaRange": "3.5+" }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for find_matches request: {}", errors);
        return validation_error(errors);
    }

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;
    let filters = req.filters.clone().unwrap_or_default();

    tracing::info!(
        "Finding matches for student: {}, candidates: {}, limit: {}",
        req.target.id,
        req.candidates.len(),
        limit
    );

    let result = state
        .matcher
        .find_filtered_matches(&req.target, &req.candidates, &filters, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for student {} (from {} candidates)",
        response.matches.len(),
        req.target.id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Study group suggestion endpoint
///
/// POST /api/v1/groups/suggest
///
/// Request body:
/// ```json
/// {
///   "students": [{ "id": "string", ... }],
///   "maxGroupSize": 5
/// }
/// ```
async fn suggest_groups(
    state: web::Data<AppState>,
    req: web::Json<SuggestGroupsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for suggest_groups request: {}", errors);
        return validation_error(errors);
    }

    let max_group_size = req
        .max_group_size
        .unwrap_or(state.matching.default_max_group_size);

    let groups = state
        .matcher
        .suggest_study_groups(&req.students, max_group_size);

    tracing::info!(
        "Suggested {} groups for {} students (max size {})",
        groups.len(),
        req.students.len(),
        max_group_size
    );

    let groups = groups
        .into_iter()
        .map(|group| SuggestedGroup {
            group_id: uuid::Uuid::new_v4(),
            members: group.members,
            average_compatibility: group.average_compatibility,
            common_courses: group.common_courses,
        })
        .collect();

    HttpResponse::Ok().json(SuggestGroupsResponse { groups })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchCriteria, Student};
    use actix_web::{test, App};
    use serde_json::json;

    fn student_json(id: &str, courses: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Student {}", id),
            "major": "Biology",
            "year": "Junior",
            "gpa": 3.4,
            "courses": courses,
            "studyPreferences": ["Group Discussion"],
            "availableHours": ["Evening (6-9 PM)"],
            "studyGoals": ["Ace the final"]
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_compatibility_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/compatibility")
            .set_json(json!({
                "studentA": student_json("a", &["Genetics"]),
                "studentB": student_json("b", &["Genetics"]),
            }))
            .to_request();
        let criteria: MatchCriteria = test::call_and_read_body_json(&app, req).await;

        assert!((criteria.overall_compatibility - 100.0).abs() < 1e-9);
    }

    #[actix_web::test]
    async fn test_find_matches_applies_filters() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/matches/find")
            .set_json(json!({
                "target": student_json("me", &["Genetics", "Ecology"]),
                "candidates": [
                    student_json("me", &["Genetics"]),
                    student_json("1", &["Genetics"]),
                    student_json("2", &["Ecology"]),
                ],
                "filters": { "subject": "Ecology", "gpaRange": "3.0-3.5" }
            }))
            .to_request();
        let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_candidates, 3);
        assert_eq!(resp.matches.len(), 1);
        assert_eq!(resp.matches[0].student.id, "2");
        assert_eq!(resp.matches[0].shared_courses, vec!["Ecology"]);
    }

    #[actix_web::test]
    async fn test_suggest_groups_rejects_tiny_groups() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/groups/suggest")
            .set_json(json!({
                "students": [student_json("1", &["Genetics"])],
                "maxGroupSize": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_suggest_groups_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/groups/suggest")
            .set_json(json!({
                "students": [
                    student_json("1", &["Genetics"]),
                    student_json("2", &["Genetics"]),
                    student_json("3", &["Genetics"]),
                ]
            }))
            .to_request();
        let resp: SuggestGroupsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.groups.len(), 1);
        let ids: Vec<String> = resp.groups[0].members.iter().map(|m: &Student| m.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(resp.groups[0].common_courses, vec!["Genetics"]);
    }
}
