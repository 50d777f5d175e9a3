use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::{MatchConfig, DEFAULT_FALLBACK_THRESHOLD};
use crate::error::MatchError;
use crate::models::{Exclusivity, ScoringWeights, WeightProfile};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub demo: DemoSettings,
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

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// `skills-heavy` or `skills-only`
    #[serde(default = "default_weight_profile")]
    pub weight_profile: String,
    /// `shared` or `exclusive`
    #[serde(default = "default_exclusivity")]
    pub exclusivity: String,
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: f64,
    /// Fixed seed for the fallback random source; entropy when unset
    pub fallback_seed: Option<u64>,
    #[serde(default)]
    pub reject_empty_mentors: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            weight_profile: default_weight_profile(),
            exclusivity: default_exclusivity(),
            fallback_threshold: default_fallback_threshold(),
            fallback_seed: None,
            reject_empty_mentors: false,
        }
    }
}

fn default_weight_profile() -> String { "skills-heavy".to_string() }
fn default_exclusivity() -> String { "shared".to_string() }
fn default_fallback_threshold() -> f64 { DEFAULT_FALLBACK_THRESHOLD }

/// Explicit weight vector; overrides the named weight profile when present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    pub weights: Option<WeightsConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeightsConfig {
    pub skills: f64,
    pub goals: f64,
    #[serde(default)]
    pub department: f64,
    #[serde(default)]
    pub role: f64,
    #[serde(default)]
    pub experience: f64,
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(w: WeightsConfig) -> Self {
        ScoringWeights {
            skills: w.skills,
            goals: w.goals,
            department: w.department,
            role: w.role,
            experience: w.experience,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoSettings {
    /// Seed the store with sample mentors and mentees on startup
    #[serde(default)]
    pub seed_profiles: bool,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_MATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__MATCHING__EXCLUSIVITY -> matching.exclusivity
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Build the engine configuration, rejecting unknown modes and bad weights
    pub fn match_config(&self) -> Result<MatchConfig, MatchError> {
        let weights = match self.scoring.weights {
            Some(custom) => ScoringWeights::from(custom),
            None => self.matching.weight_profile.parse::<WeightProfile>()?.weights(),
        };
        let exclusivity: Exclusivity = self.matching.exclusivity.parse()?;

        let config = MatchConfig::new(weights)
            .with_exclusivity(exclusivity)
            .with_fallback_threshold(self.matching.fallback_threshold)
            .with_reject_empty_mentors(self.matching.reject_empty_mentors);
        config.validate()?;

        Ok(config)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
