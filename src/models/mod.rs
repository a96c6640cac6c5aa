// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, MatchResult, Category, SkillLevel, DescriptionOptions, ScoringWeights};
pub use requests::{RecommendRequest, AnalyzeSkillRequest, DescribeSkillRequest, AssistantDescriptionRequest};
pub use responses::{
    RecommendResponse, RosterResponse, AnalyzeSkillResponse, DescribeSkillResponse,
    AssistantDescriptionResponse, HealthResponse, ErrorResponse,
};
