use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{GroupSizeRequest, RecommendationsResponse, SessionHistoryRequest};
use crate::routes::{matches::validation_error, AppState};

/// Configure all analytics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analytics/metrics", web::post().to(collaboration_metrics))
        .route("/analytics/recommendations", web::post().to(recommendations))
        .route("/analytics/group-size", web::post().to(group_size));
}

/// Collaboration metrics endpoint
///
/// POST /api/v1/analytics/metrics
///
/// Request body:
/// ```json
/// {
///   "studentId": "string",
///   "sessions": [{ "id": "string", "studentId": "string", "subject": "string", "duration": 60,
///                  "date": "2024-01-01T10:00:00Z", "type": "group", "effectiveness": 8 }]
/// }
/// ```
async fn collaboration_metrics(
    state: web::Data<AppState>,
    req: web::Json<SessionHistoryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for metrics request: {}", errors);
        return validation_error(errors);
    }

    let metrics = state
        .analytics
        .calculate_collaboration_metrics(&req.sessions, &req.student_id);

    tracing::info!(
        "Computed metrics for student {} from {} sessions (streak {} days)",
        req.student_id,
        req.sessions.len(),
        metrics.streak_days
    );

    HttpResponse::Ok().json(metrics)
}

/// Study recommendations endpoint
///
/// POST /api/v1/analytics/recommendations
///
/// Same body as the metrics endpoint; the metrics are returned alongside the advice.
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<SessionHistoryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for recommendations request: {}", errors);
        return validation_error(errors);
    }

    let metrics = state
        .analytics
        .calculate_collaboration_metrics(&req.sessions, &req.student_id);
    let recommendations = state
        .analytics
        .generate_recommendations(&metrics, &req.sessions);

    tracing::info!(
        "Generated {} recommendations for student {}",
        recommendations.len(),
        req.student_id
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        metrics,
        recommendations,
    })
}

/// Group size prediction endpoint
///
/// POST /api/v1/analytics/group-size
///
/// Request body:
/// ```json
/// {
///   "subject": "string",
///   "history": [ ...sessions ]
/// }
/// ```
async fn group_size(
    state: web::Data<AppState>,
    req: web::Json<GroupSizeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for group size request: {}", errors);
        return validation_error(errors);
    }

    let prediction = state
        .analytics
        .predict_optimal_group_size(&req.history, &req.subject);

    tracing::debug!(
        "Predicted group size {} (confidence {:.2}) for {}",
        prediction.recommended_size,
        prediction.confidence,
        req.subject
    );

    HttpResponse::Ok().json(prediction)
}
