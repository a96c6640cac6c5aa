use serde::{Deserialize, Serialize};
use std::fmt;

/// A user in the roster being evaluated as a swap partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, skills: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Scored swap recommendation for a single candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(rename = "candidateName")]
    pub candidate_name: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "complementarySkills")]
    pub complementary_skills: Vec<String>,
}

/// Broad skill category, assigned by keyword lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    Mobile,
    Design,
    #[serde(rename = "Data Science")]
    DataScience,
    DevOps,
    Marketing,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
            Category::Design => "Design",
            Category::DataScience => "Data Science",
            Category::DevOps => "DevOps",
            Category::Marketing => "Marketing",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the template description generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionOptions {
    #[serde(rename = "experienceLevel", default)]
    pub experience_level: SkillLevel,
    #[serde(rename = "includeTools", default)]
    pub include_tools: bool,
    #[serde(rename = "includeCertifications", default)]
    pub include_certifications: bool,
    #[serde(rename = "customContext", default)]
    pub custom_context: Option<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Per complementary skill (counted before truncation)
    pub complementary: f64,
    /// Per matching skill
    pub matching: f64,
    /// Per declared candidate skill
    pub diversity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            complementary: 0.6,
            matching: 0.3,
            diversity: 0.1,
        }
    }
}
