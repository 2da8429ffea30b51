//! Validated configuration types
//!
//! These are the immutable values a host holds for its whole lifetime.
//! All discovery, interpolation, and validation happens in the loader.

use serde::{Deserialize, Serialize};

use super::Provider;

/// Resolution state of a credential
///
/// A missing key is not a load failure, a host may supply one at call time,
/// so the unresolved state is explicit rather than an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiKey {
    Set(String),
    #[default]
    Unset,
}

impl ApiKey {
    /// Get the key material, if resolved
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ApiKey::Set(key) => Some(key),
            ApiKey::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, ApiKey::Set(_))
    }
}

/// One inference provider/model pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEndpoint {
    /// Display label shown to the user
    pub model_name: String,

    /// Backend provider serving this model
    pub provider: Provider,

    /// Provider-specific model identifier
    pub model: String,

    /// Credential for the provider, possibly unresolved at load time
    #[serde(default)]
    pub api_key: ApiKey,
}

/// The validated, immutable configuration consumed by the host
///
/// Constructed once at process start via [`crate::config::load`] and shared
/// by reference thereafter. `models` is guaranteed non-empty and every entry
/// carries non-empty `model_name`, `provider`, and `model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Declared model endpoints, in source order
    pub models: Vec<ModelEndpoint>,

    /// System prompt prepended to every conversation (may be empty)
    pub system_prompt: String,

    /// Whether anonymous usage telemetry is permitted
    pub allow_anonymous_telemetry: bool,
}

impl AssistantConfig {
    /// Get the default endpoint (first declared)
    ///
    /// Loader-produced configs always have one; `None` is only possible for
    /// a hand-constructed value.
    pub fn default_endpoint(&self) -> Option<&ModelEndpoint> {
        self.models.first()
    }

    /// Look up an endpoint by its display label
    pub fn endpoint(&self, model_name: &str) -> Option<&ModelEndpoint> {
        self.models.iter().find(|m| m.model_name == model_name)
    }
}
