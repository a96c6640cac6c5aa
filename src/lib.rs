//! SkillSwap Match - Skill-swap recommendation service
//!
//! This library provides the matching core used by the SkillSwap marketplace:
//! skill normalization, keyword categorization, proficiency inference, and a
//! recommender that ranks candidates by how well their skills complement a
//! requester's.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

// Re-export commonly used types
pub use crate::core::{Recommender, RecommendError, categorize, suggest_level, generate_description};
pub use crate::models::{Candidate, MatchResult, Category, SkillLevel, ScoringWeights, RecommendRequest, RecommendResponse};
pub use crate::services::{SkillAssistant, AssistantConfig, DescriptionCache};

/// Request bodies or query strings that could not be extracted
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid query: {0}")]
    Query(String),
}

impl PayloadError {
    fn code(&self) -> &'static str {
        match self {
            PayloadError::Json(_) => "invalid_json",
            PayloadError::Query(_) => "invalid_query",
        }
    }
}

impl error::ResponseError for PayloadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(models::ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// `JsonConfig` error handler
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected JSON body on {}: {}", req.path(), err);
    PayloadError::Json(err.to_string()).into()
}

/// `QueryConfig` error handler
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected query string on {}: {}", req.path(), err);
    PayloadError::Query(err.to_string()).into()
}
