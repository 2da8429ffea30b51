//! # assistant-config
//!
//! Validated configuration loading for AI coding-assistant hosts.
//!
//! A host declares its model endpoints, system prompt, and telemetry flag in
//! a small JSON file. This crate finds that file, resolves environment
//! variable references (API keys in particular), validates the structure,
//! and hands the host an immutable [`AssistantConfig`] it can share freely
//! across threads.
//!
//! The resolution core, [`config::load`], is a pure function of the raw
//! source and an injected environment mapping, so it can be tested without
//! touching the real process environment.

pub mod config;
pub mod error;

pub use config::{
    load, ApiKey, AssistantConfig, ConfigLoader, LoadOutcome, ModelEndpoint, Provider, RawConfig,
    RawModelEntry,
};
pub use error::{ConfigError, ConfigWarning, Result};

/// Current version of the assistant-config library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
