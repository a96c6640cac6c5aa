// Service exports
pub mod assistant;
pub mod cache;
pub mod roster;

pub use assistant::{SkillAssistant, AssistantConfig, AssistantError, AssistantResponse, TokenUsage};
pub use cache::{DescriptionCache, CacheKey, CacheError, CacheStats};
pub use roster::demo_roster;
