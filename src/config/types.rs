use crate::composer::GenerationRequest;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    pub api_key: Option<String>,
    #[serde(default = "default_provider")]
    pub default_provider: String,
    pub default_model: Option<String>,
    #[serde(default = "default_temperature")]
    pub default_temperature: f64,
    /// Base URL override for the provider endpoint.
    pub provider_url: Option<String>,

    #[serde(default)]
    pub poem: PoemDefaults,

    #[serde(default)]
    pub persona: PersonaConfig,
}

fn default_provider() -> String {
    "ollama".into()
}

fn default_temperature() -> f64 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            api_key: None,
            default_provider: default_provider(),
            default_model: None,
            default_temperature: default_temperature(),
            provider_url: None,
            poem: PoemDefaults::default(),
            persona: PersonaConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.default_temperature) {
            return Err(ConfigError::Validation(format!(
                "default_temperature must be within 0.0..=2.0, got {}",
                self.default_temperature
            )));
        }
        if self.default_provider.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_provider must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Poem fields saved from earlier runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemDefaults {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub seed_line: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl PoemDefaults {
    /// Fill the gaps in `explicit` with saved values. Explicit values win.
    pub fn merge(&self, explicit: GenerationRequest) -> GenerationRequest {
        GenerationRequest {
            title: explicit.title.or_else(|| self.title.clone()),
            seed_line: explicit.seed_line.or_else(|| self.seed_line.clone()),
            theme: explicit.theme.or_else(|| self.theme.clone()),
            style: explicit.style.or_else(|| self.style.clone()),
            ..explicit
        }
    }

    /// Store every poem field `explicit` sets.
    pub fn remember(&mut self, explicit: &GenerationRequest) {
        let pairs = [
            (&mut self.title, &explicit.title),
            (&mut self.seed_line, &explicit.seed_line),
            (&mut self.theme, &explicit.theme),
            (&mut self.style, &explicit.style),
        ];
        for (saved, given) in pairs {
            if given.is_some() {
                saved.clone_from(given);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// File whose trimmed contents describe the poet's perspective.
    #[serde(default)]
    pub bio_path: Option<String>,
}
