// Core algorithm exports
pub mod categorize;
pub mod describe;
pub mod jitter;
pub mod level;
pub mod normalize;
pub mod recommender;
pub mod scoring;

pub use categorize::categorize;
pub use describe::{generate_description, DescribeError};
pub use jitter::{JitterSource, ThreadRngJitter, SeededJitter, FixedJitter};
pub use level::suggest_level;
pub use normalize::{normalize, skills_match, matches_any};
pub use recommender::{Recommender, RecommendError, COMPLEMENTARY_LIMIT};
pub use scoring::{calculate_match_score, SkillCounts, MAX_MATCH_SCORE};
