use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{DomainWeights, MatchingConfig, PenaltyConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_match_limit() -> usize { 10 }
fn default_max_limit() -> usize { 50 }

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_match_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// Scoring configuration as loaded from file/environment
///
/// Converted into the engine's `MatchingConfig` (and validated there) at
/// startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub penalties: PenaltiesConfig,
    /// Display-diversity jitter on pairwise similarities; off by default so
    /// scoring stays deterministic.
    #[serde(default)]
    pub jitter: bool,
    /// Post-rank tail damping for the admin view; off by default.
    #[serde(default)]
    pub redistribute_scores: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_habits_weight")]
    pub habits: f64,
    #[serde(default = "default_social_weight")]
    pub social: f64,
    #[serde(default = "default_conflict_weight")]
    pub conflict: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            habits: default_habits_weight(),
            social: default_social_weight(),
            conflict: default_conflict_weight(),
            interests: default_interests_weight(),
        }
    }
}

fn default_habits_weight() -> f64 { 0.50 }
fn default_social_weight() -> f64 { 0.25 }
fn default_conflict_weight() -> f64 { 0.20 }
fn default_interests_weight() -> f64 { 0.05 }

#[derive(Debug, Clone, Deserialize)]
pub struct PenaltiesConfig {
    #[serde(default = "default_habits_threshold")]
    pub habits_threshold: f64,
    #[serde(default = "default_habits_factor")]
    pub habits_factor: f64,
    #[serde(default = "default_conflict_threshold")]
    pub conflict_threshold: f64,
    #[serde(default = "default_conflict_factor")]
    pub conflict_factor: f64,
}

impl Default for PenaltiesConfig {
    fn default() -> Self {
        Self {
            habits_threshold: default_habits_threshold(),
            habits_factor: default_habits_factor(),
            conflict_threshold: default_conflict_threshold(),
            conflict_factor: default_conflict_factor(),
        }
    }
}

fn default_habits_threshold() -> f64 { 0.6 }
fn default_habits_factor() -> f64 { 0.7 }
fn default_conflict_threshold() -> f64 { 0.5 }
fn default_conflict_factor() -> f64 { 0.8 }

impl ScoringSettings {
    /// Assemble the engine configuration; the caller validates it via
    /// `Matcher::new` before serving traffic.
    pub fn to_matching_config(&self) -> MatchingConfig {
        MatchingConfig {
            weights: DomainWeights {
                habits: self.weights.habits,
                social: self.weights.social,
                conflict: self.weights.conflict,
                interests: self.weights.interests,
            },
            penalties: PenaltyConfig {
                habits_threshold: self.penalties.habits_threshold,
                habits_factor: self.penalties.habits_factor,
                conflict_threshold: self.penalties.conflict_threshold,
                conflict_factor: self.penalties.conflict_factor,
            },
            jitter: self.jitter,
            redistribute_scores: self.redistribute_scores,
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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ROOMIE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROOMIE_)
            // e.g., ROOMIE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMIE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides
///
/// DATABASE_URL wins over the config file so deployments can point the
/// service at a different database without editing TOML.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("ROOMIE_DATABASE__URL"))
        .unwrap_or_else(|_| "sqlite://roomie.db?mode=rwc".to_string());

    Config::builder()
        .add_source(settings)
        .set_override("database.url", database_url)?
        .build()
}
