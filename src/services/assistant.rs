use crate::core::{describe::DescribeError, recommender::RecommendError, Recommender};
use crate::core::normalize::normalize;
use crate::models::{Candidate, MatchResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors surfaced by the skill assistant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssistantError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation failed: {0}")]
    GenerationFailure(String),
}

impl From<RecommendError> for AssistantError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::InvalidInput(msg) => AssistantError::InvalidInput(msg),
            RecommendError::GenerationFailure(msg) => AssistantError::GenerationFailure(msg),
        }
    }
}

impl From<DescribeError> for AssistantError {
    fn from(err: DescribeError) -> Self {
        AssistantError::InvalidInput(err.to_string())
    }
}

/// Assistant client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: "mock-api-key".to_string(),
            model: "skillswap-gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 150,
        }
    }
}

/// Token usage for one generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(rename = "promptTokens")]
    pub prompt_tokens: usize,
    #[serde(rename = "completionTokens")]
    pub completion_tokens: usize,
    #[serde(rename = "totalTokens")]
    pub total_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub text: String,
    pub usage: TokenUsage,
}

/// Canned completions, tried in order with containment in either direction
static CANNED_RESPONSES: &[(&str, &str)] = &[
    ("react", "Expert React developer with deep knowledge of hooks, context, and modern patterns. Specializes in building scalable SPAs with optimal performance and clean architecture."),
    ("nodejs", "Full-stack Node.js engineer experienced in building robust APIs, microservices, and real-time applications. Proficient in Express, database integration, and cloud deployment."),
    ("python", "Versatile Python developer skilled in web development, data analysis, and automation. Expert in Django/Flask, pandas, and machine learning libraries with strong problem-solving abilities."),
    ("javascript", "Advanced JavaScript developer with expertise in modern ES6+, async programming, and framework integration. Experienced in performance optimization and testing methodologies."),
    ("design", "Creative UI/UX designer with keen eye for user-centered design and modern aesthetics. Skilled in Figma, prototyping, and creating intuitive digital experiences."),
    ("marketing", "Strategic digital marketer with proven track record in SEO, social media, and conversion optimization. Expert in analytics, campaign management, and growth hacking."),
    ("data science", "Data scientist with strong analytical skills in statistical modeling, machine learning, and data visualization. Proficient in Python, R, and advanced analytics platforms."),
];

const FALLBACK_SKILL: &str = "programming";

// Compiled on first use; the pattern is a literal, so construction cannot fail.
static SKILL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn skill_pattern() -> &'static Regex {
    SKILL_PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)skill[:\s]+["']?([^"'\n.]+)["']?"#).expect("skill pattern is valid")
    })
}

/// Offline stand-in for a text-generation vendor
///
/// Built once at startup and handed to request handlers; there is no global
/// instance. The completion is chosen from a canned table keyed on the skill
/// named in the prompt, with no network access.
#[derive(Debug, Clone)]
pub struct SkillAssistant {
    config: AssistantConfig,
    recommender: Recommender,
}

impl SkillAssistant {
    pub fn new(config: AssistantConfig, recommender: Recommender) -> Self {
        Self { config, recommender }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Generate a completion for `prompt`
    pub fn generate_text(&self, prompt: &str) -> AssistantResponse {
        let skill = extract_skill(prompt);
        let text = canned_response(&skill);

        let prompt_tokens = prompt.split_whitespace().count();
        let completion_tokens = text.split_whitespace().count();

        tracing::debug!(
            model = %self.config.model,
            prompt_tokens,
            completion_tokens,
            "Generated completion for skill {:?}",
            skill
        );

        AssistantResponse {
            text,
            usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
        }
    }

    /// Generate a short, catchy description for a skill
    pub fn describe_skill(&self, skill_name: &str) -> Result<String, AssistantError> {
        let skill_name = skill_name.trim();
        if skill_name.is_empty() {
            return Err(AssistantError::InvalidInput("Skill name is required".to_string()));
        }

        let prompt = format!(
            "Generate a short, professional, and catchy description for someone with expertise in {skill_name}.\n\
             The description should be:\n\
             - 2-3 sentences maximum\n\
             - Highlight key competencies and experience\n\
             - Professional but engaging tone\n\
             - Suitable for a skill-sharing platform\n\
             - Focus on what they can teach or offer to others\n\
             \n\
             Skill: {skill_name}"
        );

        Ok(self.generate_text(&prompt).text.trim().to_string())
    }

    /// Recommend swap partners for `user_skills` from `roster`
    pub fn recommend_skill_swap(
        &self,
        user_skills: &[String],
        roster: &[Candidate],
    ) -> Result<Vec<MatchResult>, AssistantError> {
        if user_skills.is_empty() {
            return Err(AssistantError::InvalidInput("User skills are required".to_string()));
        }

        let roster_lines = roster
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}: {}", i + 1, c.name, c.skills.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = format!(
            "Analyze skill compatibility for skill swapping recommendations.\n\n\
             User's Skills: {}\n\n\
             All Users and Their Skills:\n{}\n\n\
             Provide recommendations based on:\n\
             1. Complementary skills (what user wants to learn that others have)\n\
             2. Skills the user can teach that others need\n\
             3. Overall compatibility and learning potential\n\n\
             Return analysis for skill swap matching.",
            user_skills.join(", "),
            roster_lines
        );

        let response = self.generate_text(&prompt);
        tracing::debug!("Recommendation prompt used {} tokens", response.usage.total_tokens);

        self.recommender.recommend(user_skills, roster).map_err(|e| {
            tracing::error!("Error generating skill swap recommendations: {}", e);
            AssistantError::from(e)
        })
    }
}

/// Pull the skill name out of a prompt, falling back to a generic skill
fn extract_skill(prompt: &str) -> String {
    skill_pattern()
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_SKILL.to_string())
}

fn canned_response(skill: &str) -> String {
    let normalized = normalize(skill);

    CANNED_RESPONSES
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| {
            format!(
                "Experienced {} professional with hands-on expertise and passion for delivering \
                 high-quality solutions. Strong problem-solver with excellent communication skills \
                 and commitment to continuous learning.",
                skill
            )
        })
}
