use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, Category, MatchResult, SkillLevel};
use crate::services::CacheStats;

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub recommendations: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the roster endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub candidates: Vec<Candidate>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeSkillResponse {
    #[serde(rename = "skillName")]
    pub skill_name: String,
    pub category: Category,
    #[serde(rename = "suggestedLevel")]
    pub suggested_level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescribeSkillResponse {
    #[serde(rename = "skillName")]
    pub skill_name: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "suggestedLevel")]
    pub suggested_level: SkillLevel,
    pub cached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantDescriptionResponse {
    #[serde(rename = "skillName")]
    pub skill_name: String,
    pub description: String,
    pub model: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
