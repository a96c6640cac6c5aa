use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{categorize, generate_description, suggest_level};
use crate::models::{
    AnalyzeSkillRequest, AnalyzeSkillResponse, AssistantDescriptionRequest,
    AssistantDescriptionResponse, DescribeSkillRequest, DescribeSkillResponse, ErrorResponse,
};
use crate::routes::recommendations::{assistant_error_response, AppState};
use crate::services::{AssistantError, CacheKey};

/// Configure skill helper routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .route("/analyze", web::post().to(analyze_skill))
            .route("/describe", web::post().to(describe_skill))
            .route("/assistant-description", web::post().to(assistant_description)),
    );
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Categorize a skill and infer a level from its description
///
/// POST /api/v1/skills/analyze
async fn analyze_skill(req: web::Json<AnalyzeSkillRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let category = categorize(&req.skill_name);
    let suggested_level = req.description.as_deref().map(suggest_level);

    tracing::debug!("Analyzed skill {:?}: {} ({:?})", req.skill_name, category, suggested_level);

    HttpResponse::Ok().json(AnalyzeSkillResponse {
        skill_name: req.skill_name.clone(),
        category,
        suggested_level,
    })
}

/// Generate a template description for a skill
///
/// POST /api/v1/skills/describe
///
/// Request body:
/// ```json
/// {
///   "skillName": "React",
///   "experienceLevel": "beginner|intermediate|advanced",
///   "includeTools": false,
///   "includeCertifications": false,
///   "customContext": "string"
/// }
/// ```
async fn describe_skill(
    state: web::Data<AppState>,
    req: web::Json<DescribeSkillRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let cache_key = CacheKey::description(&req.skill_name, &req.options);

    let (description, cached) = match state.cache.get::<String>(&cache_key).await {
        Ok(description) => (description, true),
        Err(_) => match generate_description(&req.skill_name, &req.options) {
            Ok(description) => {
                if let Err(e) = state.cache.set(&cache_key, &description).await {
                    tracing::warn!("Failed to cache description: {}", e);
                }
                (description, false)
            }
            Err(e) => return assistant_error_response(&AssistantError::from(e)),
        },
    };

    tracing::info!("Described skill {:?} (cached: {})", req.skill_name, cached);

    HttpResponse::Ok().json(DescribeSkillResponse {
        skill_name: req.skill_name.clone(),
        category: categorize(&req.skill_name),
        suggested_level: suggest_level(&description),
        description,
        cached,
    })
}

/// Generate an assistant description for a skill
///
/// POST /api/v1/skills/assistant-description
async fn assistant_description(
    state: web::Data<AppState>,
    req: web::Json<AssistantDescriptionRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let cache_key = CacheKey::assistant_description(&req.skill_name);

    let description = match state.cache.get::<String>(&cache_key).await {
        Ok(description) => description,
        Err(_) => match state.assistant.describe_skill(&req.skill_name) {
            Ok(description) => {
                if let Err(e) = state.cache.set(&cache_key, &description).await {
                    tracing::warn!("Failed to cache assistant description: {}", e);
                }
                description
            }
            Err(e) => {
                tracing::error!("Error generating skill description: {}", e);
                return assistant_error_response(&e);
            }
        },
    };

    HttpResponse::Ok().json(AssistantDescriptionResponse {
        skill_name: req.skill_name.clone(),
        description,
        model: state.assistant.config().model.clone(),
    })
}
