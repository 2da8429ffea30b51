//! Configuration loading and resolution
//!
//! Two layers:
//! - [`load`] is the pure core: raw source + an injected environment mapping
//!   in, validated [`AssistantConfig`] plus warnings out. No I/O, no logging.
//! - [`ConfigLoader`] finds and reads the config file, then hands the real
//!   process environment to [`load`]. Search order:
//!   1. Explicit override path (file or directory)
//!   2. Current working directory: ./assistant.json or ./.assistant/config.json
//!   3. Git repository root: <repo_root>/.assistant/config.json
//!   4. User config dir: <config_dir>/assistant/config.json

use anyhow::{anyhow, Context};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ApiKey, AssistantConfig, ModelEndpoint, Provider, RawConfig};
use crate::error::{ConfigError, ConfigWarning, Result};

/// Result of a successful load: the config plus any non-fatal warnings
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub config: AssistantConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Validate and resolve a raw configuration against an environment mapping
///
/// Pure function of its inputs: environment access goes through the `env`
/// parameter, never through `std::env`. Structural violations fail the whole
/// load; an unresolvable API key only produces a warning, since the host may
/// supply the key later at call time.
pub fn load(source: &RawConfig, env: &HashMap<String, String>) -> Result<LoadOutcome> {
    let entries = source.models.as_ref().ok_or_else(|| ConfigError::MissingField {
        field: "models".to_string(),
    })?;
    if entries.is_empty() {
        return Err(ConfigError::NoModels);
    }

    let mut warnings = Vec::new();
    let mut models = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let model_name = required_string(&entry.model_name, index, "modelName")?;
        let provider_name = required_string(&entry.provider, index, "provider")?;
        let model = required_string(&entry.model, index, "model")?;
        let provider = Provider::parse(&provider_name);

        let api_key = match &entry.api_key {
            Some(value) => match env_ref(value) {
                Some(var) => match env.get(var) {
                    Some(resolved) => ApiKey::Set(resolved.clone()),
                    None => {
                        warnings.push(ConfigWarning::UnresolvedEnvVar {
                            field: format!("models[{index}].apiKey"),
                            var: var.to_string(),
                        });
                        ApiKey::Unset
                    }
                },
                None => ApiKey::Set(value.clone()),
            },
            // No key declared at all: fall back to the provider's
            // conventional variable, quietly staying unset if absent.
            None => match env.get(&provider.default_key_var()) {
                Some(resolved) => ApiKey::Set(resolved.clone()),
                None => ApiKey::Unset,
            },
        };

        models.push(ModelEndpoint {
            model_name,
            provider,
            model,
            api_key,
        });
    }

    let system_prompt = match &source.system_prompt {
        Some(value) => match env_ref(value) {
            Some(var) => match env.get(var) {
                Some(resolved) => resolved.clone(),
                None => {
                    warnings.push(ConfigWarning::UnresolvedEnvVar {
                        field: "systemPrompt".to_string(),
                        var: var.to_string(),
                    });
                    String::new()
                }
            },
            None => value.clone(),
        },
        None => String::new(),
    };

    let config = AssistantConfig {
        models,
        system_prompt,
        allow_anonymous_telemetry: source.allow_anonymous_telemetry.unwrap_or(false),
    };

    Ok(LoadOutcome { config, warnings })
}

/// Extract the non-empty required string at `models[index].<name>`
fn required_string(value: &Option<String>, index: usize, name: &str) -> Result<String> {
    match value {
        None => Err(ConfigError::MissingField {
            field: format!("models[{index}].{name}"),
        }),
        Some(s) if s.is_empty() => Err(ConfigError::InvalidValue {
            field: format!("models[{index}].{name}"),
            value: s.clone(),
        }),
        Some(s) => Ok(s.clone()),
    }
}

/// Parse a whole-field environment reference, if the value is one
///
/// Accepts `$VAR`, `${VAR}`, and `env:VAR`. Anything else, including a lone
/// `$`, is treated as a literal value.
fn env_ref(value: &str) -> Option<&str> {
    if let Some(var) = value.strip_prefix("env:") {
        return (!var.is_empty()).then_some(var);
    }
    if let Some(inner) = value.strip_prefix("${") {
        return inner.strip_suffix('}').filter(|v| !v.is_empty());
    }
    if let Some(var) = value.strip_prefix('$') {
        return (!var.is_empty()).then_some(var);
    }
    None
}

/// File-discovery configuration loader
///
/// Reads the declarative source from disk and resolves it against the real
/// process environment. Unlike [`load`], this layer logs the warnings it
/// collects, since it already owns the process-level concerns.
pub struct ConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new loader using the default search order
    pub fn new() -> Self {
        Self {
            config_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> anyhow::Result<LoadOutcome> {
        let raw = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            let cwd = std::env::current_dir()?;
            self.search_and_load(&cwd).await?
        };

        let env: HashMap<String, String> = std::env::vars().collect();
        let outcome = load(&raw, &env)?;

        for warning in &outcome.warnings {
            tracing::warn!("{warning}");
        }

        Ok(outcome)
    }

    /// Search for config in priority order, starting from `cwd`
    async fn search_and_load(&self, cwd: &Path) -> anyhow::Result<RawConfig> {
        if let Some(raw) = self.try_load_cwd(cwd).await? {
            return Ok(raw);
        }

        if let Some(raw) = self.try_load_git_root(cwd).await? {
            return Ok(raw);
        }

        if let Some(raw) = self.try_load_user_config_dir().await? {
            return Ok(raw);
        }

        Err(anyhow!(
            "No configuration found. Please create an assistant.json file or .assistant/config.json"
        ))
    }

    /// Try loading from the working directory
    async fn try_load_cwd(&self, cwd: &Path) -> anyhow::Result<Option<RawConfig>> {
        let assistant_json = cwd.join("assistant.json");
        if assistant_json.exists() {
            return Ok(Some(self.load_file(&assistant_json).await?));
        }

        let dir_config = cwd.join(".assistant").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self, cwd: &Path) -> anyhow::Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root(cwd) {
            let config_path = git_root.join(".assistant").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from the user's config directory
    async fn try_load_user_config_dir(&self) -> anyhow::Result<Option<RawConfig>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("assistant").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> anyhow::Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> anyhow::Result<RawConfig> {
        tracing::debug!("Loading configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root by walking up from `start`
    fn find_git_root(&self, start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(".git").exists() {
                return Some(current);
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        None
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantConfig {
    /// Load from an explicit file or directory path, resolving API keys
    /// against the real process environment
    pub async fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<LoadOutcome> {
        ConfigLoader::new()
            .with_config_override(path.as_ref().to_path_buf())
            .load()
            .await
    }
}
