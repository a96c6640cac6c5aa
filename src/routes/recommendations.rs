use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{RecommendRequest, RecommendResponse, RosterResponse, HealthResponse, ErrorResponse};
use crate::services::{AssistantError, DescriptionCache, SkillAssistant, demo_roster};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<SkillAssistant>,
    pub cache: Arc<DescriptionCache>,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend))
        .route("/roster", web::get().to(roster));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: state.cache.stats(),
    })
}

/// Map an assistant error to its JSON response
pub(crate) fn assistant_error_response(err: &AssistantError) -> HttpResponse {
    match err {
        AssistantError::InvalidInput(msg) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_input".to_string(),
            message: msg.clone(),
            status_code: 400,
        }),
        AssistantError::GenerationFailure(msg) => {
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "generation_failure".to_string(),
                message: msg.clone(),
                status_code: 500,
            })
        }
    }
}

/// Recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "skills": ["React Development", "JavaScript"],
///   "candidates": [{"id": "1", "name": "Sarah", "skills": ["Node.js", "React"]}]
/// }
/// ```
///
/// `candidates` may be omitted to score the demo roster.
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let req = req.into_inner();

    let roster = req.candidates.unwrap_or_else(demo_roster);

    tracing::info!(
        "Recommending for request {}: {} skills, {} candidates",
        request_id,
        req.skills.len(),
        roster.len()
    );

    match state.assistant.recommend_skill_swap(&req.skills, &roster) {
        Ok(recommendations) => {
            tracing::info!(
                "Returning {} recommendations for request {}",
                recommendations.len(),
                request_id
            );

            HttpResponse::Ok().json(RecommendResponse {
                request_id,
                recommendations,
                total_candidates: roster.len(),
            })
        }
        Err(e) => {
            tracing::warn!("Recommendation request {} failed: {}", request_id, e);
            assistant_error_response(&e)
        }
    }
}

/// Demo roster endpoint
///
/// GET /api/v1/roster
async fn roster() -> impl Responder {
    let candidates = demo_roster();
    let count = candidates.len();
    HttpResponse::Ok().json(RosterResponse { candidates, count })
}
