use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, DescriptionOptions};

/// Request for swap recommendations
///
/// An absent `candidates` field falls back to the demo roster; an explicit
/// empty list yields no recommendations. An empty `skills` list passes
/// validation and is rejected by the assistant as invalid input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(max = 50))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// Request to categorize a skill and, optionally, infer its level
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeSkillRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "skill_name", rename = "skillName")]
    pub skill_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request for a template-generated skill description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DescribeSkillRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "skill_name", rename = "skillName")]
    pub skill_name: String,
    #[serde(flatten)]
    pub options: DescriptionOptions,
}

/// Request for an assistant-generated skill description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantDescriptionRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "skill_name", rename = "skillName")]
    pub skill_name: String,
}
