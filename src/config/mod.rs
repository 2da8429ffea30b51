//! Assistant configuration: raw source shape, validated types, and loading

pub mod loader;
pub mod provider;
pub mod raw;
pub mod types;

pub use loader::{load, ConfigLoader, LoadOutcome};
pub use provider::Provider;
pub use raw::{RawConfig, RawModelEntry};
pub use types::{ApiKey, AssistantConfig, ModelEndpoint};
