//! Inference provider identifiers

use serde::{Deserialize, Serialize, Serializer};

/// Known inference providers
///
/// The set is open: any identifier outside the well-known ones is carried
/// through as [`Provider::Custom`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provider {
    Groq,
    OpenAI,
    Anthropic,
    Google,
    Custom(String),
}

impl Provider {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
            Provider::Google => "google",
            Provider::Custom(name) => name,
        }
    }

    /// Parse a provider identifier (never fails, unknown names become Custom)
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "groq" => Provider::Groq,
            "openai" => Provider::OpenAI,
            "anthropic" => Provider::Anthropic,
            "google" | "gemini" => Provider::Google,
            _ => Provider::Custom(s.to_string()),
        }
    }

    /// Conventional environment variable holding this provider's API key
    ///
    /// Used as a fallback when a model entry declares no `apiKey` at all.
    pub fn default_key_var(&self) -> String {
        match self {
            Provider::Groq => "GROQ_API_KEY".to_string(),
            Provider::OpenAI => "OPENAI_API_KEY".to_string(),
            Provider::Anthropic => "ANTHROPIC_API_KEY".to_string(),
            Provider::Google => "GOOGLE_API_KEY".to_string(),
            Provider::Custom(name) => {
                format!("{}_API_KEY", name.to_uppercase().replace('-', "_"))
            }
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Provider::parse(s))
    }
}

impl Serialize for Provider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Provider::parse(&s))
    }
}
