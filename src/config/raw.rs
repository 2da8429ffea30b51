//! Raw configuration file format
//!
//! Mirrors the declarative source shape before any validation or environment
//! interpolation has happened. All fields are optional here; the loader is
//! responsible for enforcing which ones are actually required.

use serde::{Deserialize, Serialize};

/// Unvalidated top-level configuration as written by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Declared model entries
    pub models: Option<Vec<RawModelEntry>>,

    /// System prompt string
    pub system_prompt: Option<String>,

    /// Telemetry opt-in flag
    pub allow_anonymous_telemetry: Option<bool>,
}

impl RawConfig {
    /// Create an empty raw configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a model entry
    pub fn with_model(mut self, entry: RawModelEntry) -> Self {
        self.models.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set the telemetry flag
    pub fn with_telemetry(mut self, allow: bool) -> Self {
        self.allow_anonymous_telemetry = Some(allow);
        self
    }
}

/// One unvalidated model entry
///
/// `api_key` may be a literal secret or an environment-variable reference
/// (`$VAR`, `${VAR}`, or `env:VAR`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModelEntry {
    pub model_name: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl RawModelEntry {
    /// Create an entry with the three required identity fields
    pub fn new(
        model_name: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            model_name: Some(model_name.into()),
            provider: Some(provider.into()),
            model: Some(model.into()),
            api_key: None,
        }
    }

    /// Set the API key (literal or environment reference)
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}
