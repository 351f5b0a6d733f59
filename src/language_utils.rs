/*!
 * Language utilities for the fixed set of supported translation languages.
 *
 * The UI only ever offers this six-code set, so languages are modeled as a
 * closed enum rather than free-form ISO codes. Display names come from the
 * isolang registry so they stay consistent with the rest of the ecosystem.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// One of the supported translation languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (en)
    English,
    /// Spanish (es)
    Spanish,
    /// French (fr)
    French,
    /// German (de)
    German,
    /// Italian (it)
    Italian,
    /// Romanian (ro)
    Romanian,
}

impl Language {
    /// All supported languages, in the order the UI offers them
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Romanian,
    ];

    /// ISO 639-1 (2-letter) code sent to the translation service
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Romanian => "ro",
        }
    }

    /// Human-readable English name, taken from the isolang registry
    pub fn name(&self) -> &'static str {
        self.isolang().to_name()
    }

    fn isolang(&self) -> isolang::Language {
        match self {
            Self::English => isolang::Language::Eng,
            Self::Spanish => isolang::Language::Spa,
            Self::French => isolang::Language::Fra,
            Self::German => isolang::Language::Deu,
            Self::Italian => isolang::Language::Ita,
            Self::Romanian => isolang::Language::Ron,
        }
    }

    /// Parse a 2-letter code from the supported set
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == normalized)
            .ok_or_else(|| anyhow!("Unsupported language code: {}", code))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
