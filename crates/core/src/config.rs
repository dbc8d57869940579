//! Configuration management for Concierge.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults
//! - Config files (.concierge/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources win over earlier ones.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default knowledge base file, relative to the workspace.
pub const DEFAULT_KNOWLEDGE_FILE: &str = "dataset.json";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .concierge/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Active LLM provider ("ollama", "mock")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Provider endpoint override
    pub endpoint: Option<String>,

    /// Knowledge base file; relative paths resolve against the workspace
    pub knowledge_path: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Limits around the generative fallback
    pub generation: GenerationSettings,

    /// LLM provider configurations
    pub llm: Option<LlmConfig>,
}

/// Host-side limits for model invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Maximum number of model invocations in flight
    #[serde(rename = "maxConcurrent", default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Per-invocation timeout in seconds (0 disables the timeout)
    #[serde(rename = "timeoutSecs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_concurrent() -> usize {
    2
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// LLM configuration from config.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    pub providers: HashMap<String, ProviderConfig>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    Ollama {
        endpoint: String,
        model: String,
        timeout: Option<u64>,
    },
    Mock {
        /// Completion returned for every request
        reply: Option<String>,
    },
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    llm: Option<LlmConfig>,
    workspace: Option<WorkspaceConfig>,
    knowledge: Option<KnowledgeConfig>,
    generation: Option<GenerationSettings>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorkspaceConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnowledgeConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            provider: "ollama".to_string(),
            model: "llama3.2".to_string(),
            endpoint: None,
            knowledge_path: None,
            log_level: None,
            verbose: false,
            no_color: false,
            generation: GenerationSettings::default(),
            llm: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the YAML config file and environment variables.
    ///
    /// Environment variables:
    /// - `CONCIERGE_WORKSPACE`: Override workspace path
    /// - `CONCIERGE_CONFIG`: Path to config file
    /// - `CONCIERGE_PROVIDER`: LLM provider
    /// - `CONCIERGE_MODEL`: Model identifier
    /// - `CONCIERGE_ENDPOINT`: Provider endpoint
    /// - `CONCIERGE_KNOWLEDGE`: Knowledge base file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use concierge_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Knowledge: {:?}", config.knowledge_file());
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(workspace) = std::env::var("CONCIERGE_WORKSPACE") {
            config.workspace = PathBuf::from(workspace);
        }

        if let Ok(config_file) = std::env::var("CONCIERGE_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.concierge_dir().join("config.yaml"),
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("CONCIERGE_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("CONCIERGE_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("CONCIERGE_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        if let Ok(knowledge) = std::env::var("CONCIERGE_KNOWLEDGE") {
            config.knowledge_path = Some(PathBuf::from(knowledge));
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into a copy of this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(path) = config_file.workspace.and_then(|ws| ws.path) {
            result.workspace = PathBuf::from(path);
        }

        if let Some(path) = config_file.knowledge.and_then(|kb| kb.path) {
            result.knowledge_path = Some(PathBuf::from(path));
        }

        if let Some(generation) = config_file.generation {
            result.generation = generation;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            result.provider = llm.active_provider.clone();

            if let Some(provider_config) = llm.providers.get(&llm.active_provider) {
                match provider_config {
                    ProviderConfig::Ollama {
                        endpoint, model, ..
                    } => {
                        result.model = model.clone();
                        result.endpoint = Some(endpoint.clone());
                    }
                    ProviderConfig::Mock { .. } => {
                        result.model = "mock".to_string();
                    }
                }
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over environment variables and the
    /// config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        knowledge: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(knowledge) = knowledge {
            self.knowledge_path = Some(knowledge);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .concierge directory.
    pub fn concierge_dir(&self) -> PathBuf {
        self.workspace.join(".concierge")
    }

    /// Resolve the knowledge base file path.
    pub fn knowledge_file(&self) -> PathBuf {
        match self.knowledge_path {
            Some(ref path) if path.is_absolute() => path.clone(),
            Some(ref path) => self.workspace.join(path),
            None => self.workspace.join(DEFAULT_KNOWLEDGE_FILE),
        }
    }

    /// Get the configuration for a provider, if the config file declared one.
    pub fn get_provider_config(&self, provider: &str) -> Option<ProviderConfig> {
        self.llm
            .as_ref()
            .and_then(|llm| llm.providers.get(provider).cloned())
    }

    /// Canned completion for the mock provider, if configured.
    pub fn mock_reply(&self) -> Option<String> {
        match self.get_provider_config(&self.provider) {
            Some(ProviderConfig::Mock { reply }) => reply,
            _ => None,
        }
    }

    /// Request timeout configured for the active provider.
    pub fn provider_timeout(&self) -> Option<u64> {
        match self.get_provider_config(&self.provider) {
            Some(ProviderConfig::Ollama { timeout, .. }) => timeout,
            _ => None,
        }
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["ollama", "mock"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.generation.max_concurrent == 0 {
            return Err(AppError::Config(
                "generation.maxConcurrent must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
