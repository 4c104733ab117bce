use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;
use crate::services::PlaceholderCollaborationData;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
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

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_max_group_size")]
    pub default_max_group_size: usize,
    #[serde(default = "default_admission_threshold")]
    pub group_admission_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            default_max_group_size: default_max_group_size(),
            group_admission_threshold: default_admission_threshold(),
        }
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }
fn default_max_group_size() -> usize { 5 }
fn default_admission_threshold() -> f64 { 70.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_common_courses_weight")]
    pub common_courses: f64,
    #[serde(default = "default_schedule_overlap_weight")]
    pub schedule_overlap: f64,
    #[serde(default = "default_study_style_weight")]
    pub study_style: f64,
    #[serde(default = "default_academic_level_weight")]
    pub academic_level: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            common_courses: default_common_courses_weight(),
            schedule_overlap: default_schedule_overlap_weight(),
            study_style: default_study_style_weight(),
            academic_level: default_academic_level_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            common_courses: config.common_courses,
            schedule_overlap: config.schedule_overlap,
            study_style: config.study_style,
            academic_level: config.academic_level,
        }
    }
}

fn default_common_courses_weight() -> f64 { 0.35 }
fn default_schedule_overlap_weight() -> f64 { 0.25 }
fn default_study_style_weight() -> f64 { 0.25 }
fn default_academic_level_weight() -> f64 { 0.15 }

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    #[serde(default = "default_peer_rating")]
    pub peer_rating: f64,
    #[serde(default)]
    pub tutoring_sessions_given: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            peer_rating: default_peer_rating(),
            tutoring_sessions_given: 0,
        }
    }
}

impl From<&AnalyticsSettings> for PlaceholderCollaborationData {
    fn from(settings: &AnalyticsSettings) -> Self {
        Self::new(settings.peer_rating, settings.tutoring_sessions_given)
    }
}

fn default_peer_rating() -> f64 { 4.2 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDY_MATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDY_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Scoring weights as used by the matcher
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    /// Reject settings the engines cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring_weights()
            .validate()
            .map_err(|e| ConfigError::Message(format!("scoring.weights: {}", e)))?;

        if self.matching.max_limit < self.matching.default_limit {
            return Err(ConfigError::Message(format!(
                "matching.max_limit ({}) is below matching.default_limit ({})",
                self.matching.max_limit, self.matching.default_limit
            )));
        }

        if self.matching.default_max_group_size < 2 {
            return Err(ConfigError::Message(
                "matching.default_max_group_size must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("STUDY_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
