/*!
 * In-memory application configuration and its validation.
 *
 * Nothing here is persisted: the application carries no configuration file
 * and rebuilds defaults on every start.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils::Language;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language for translation
    pub source_language: Language,

    /// Target language for translation
    pub target_language: Language,

    /// Translation service settings
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Base URL of the translation service
    #[serde(default = "TranslationConfig::default_endpoint")]
    pub endpoint: String,

    /// Optional API key for hosted instances
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Upper bound on a single translation round trip, in seconds
    #[serde(default = "TranslationConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslationConfig {
    fn default_endpoint() -> String {
        "http://localhost:5000".to_string()
    }

    fn default_timeout_secs() -> u64 {
        60
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            api_key: String::new(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // Defaults mirror the reference behavior: English source, Spanish target
        Self {
            source_language: Language::English,
            target_language: Language::Spanish,
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.translation.endpoint.trim().is_empty() {
            return Err(anyhow!("Translation endpoint must not be empty"));
        }
        if !self.translation.endpoint.starts_with("http://")
            && !self.translation.endpoint.starts_with("https://")
        {
            return Err(anyhow!(
                "Translation endpoint must be an http(s) URL: {}",
                self.translation.endpoint
            ));
        }
        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("Translation timeout must be at least 1 second"));
        }
        Ok(())
    }
}
