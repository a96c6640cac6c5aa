use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use crate::core::{FixedJitter, JitterSource, SeededJitter, ThreadRngJitter};
use crate::models::ScoringWeights;
use crate::services::AssistantConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub jitter: JitterSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_complementary_weight")]
    pub complementary: f64,
    #[serde(default = "default_matching_weight")]
    pub matching: f64,
    #[serde(default = "default_diversity_weight")]
    pub diversity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            complementary: default_complementary_weight(),
            matching: default_matching_weight(),
            diversity: default_diversity_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            complementary: config.complementary,
            matching: config.matching,
            diversity: config.diversity,
        }
    }
}

fn default_complementary_weight() -> f64 { 0.6 }
fn default_matching_weight() -> f64 { 0.3 }
fn default_diversity_weight() -> f64 { 0.1 }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterMode {
    #[default]
    Random,
    Seeded,
    Fixed,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JitterSettings {
    #[serde(default)]
    pub mode: JitterMode,
    /// Seed for `seeded` mode
    pub seed: Option<u64>,
    /// Unit value for `fixed` mode
    pub value: Option<f64>,
}

impl JitterSettings {
    /// Build the configured jitter source
    pub fn build(&self) -> Arc<dyn JitterSource> {
        match self.mode {
            JitterMode::Random => Arc::new(ThreadRngJitter),
            JitterMode::Seeded => Arc::new(SeededJitter::new(self.seed.unwrap_or(0))),
            JitterMode::Fixed => Arc::new(FixedJitter::new(self.value.unwrap_or(0.0))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantSettings {
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl From<&AssistantSettings> for AssistantConfig {
    fn from(settings: &AssistantSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }
}

fn default_api_key() -> String { "mock-api-key".to_string() }
fn default_model() -> String { "skillswap-gpt-4".to_string() }
fn default_temperature() -> f64 { 0.7 }
fn default_max_tokens() -> u32 { 150 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: Some(300),
            l1_cache_size: Some(1000),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLSWAP_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLSWAP__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment variables that sit outside the prefix
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("ASSISTANT_API_KEY") {
        builder = builder.set_override("assistant.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.complementary, 0.6);
        assert_eq!(weights.matching, 0.3);
        assert_eq!(weights.diversity, 0.1);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_fixed_jitter_from_settings() {
        let settings = JitterSettings {
            mode: JitterMode::Fixed,
            seed: None,
            value: Some(0.25),
        };
        assert_eq!(settings.build().unit(), 0.25);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("skillswap-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[scoring.weights]\ncomplementary = 1.0\n\n[scoring.jitter]\nmode = \"seeded\"\nseed = 11\n\n[assistant]\nmodel = \"test-model\""
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.scoring.weights.complementary, 1.0);
        assert_eq!(settings.scoring.weights.matching, 0.3);
        assert_eq!(settings.scoring.jitter.mode, JitterMode::Seeded);
        assert_eq!(settings.scoring.jitter.seed, Some(11));
        assert_eq!(settings.assistant.model, "test-model");
        assert_eq!(settings.assistant.max_tokens, 150);
    }
}
