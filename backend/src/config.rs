use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub static_config: StaticConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub enabled: bool,
    pub web_root: String,
}

/// Completion provider settings (loaded from the `[llm]` section)
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Full chat-completions endpoint URL
    pub api_url: String,
    /// Bearer credential sent with every request
    pub api_key: String,
    pub model: String,
    pub sampling: SamplingConfig,
}

/// Sampling parameters forwarded verbatim in the request body.
///
/// `enable_thinking` and `thinking_budget` are only meaningful to providers
/// with a reasoning phase; they are passed through untouched.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub max_tokens: u32,
    pub enable_thinking: bool,
    pub thinking_budget: u32,
    pub min_p: f32,
    pub stop: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub frequency_penalty: f32,
    pub n: u32,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the given path, or the first config.toml found
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        let config_path = match path {
            Some(p) => Some(p.to_string()),
            None => Self::find_config_file(),
        };

        let mut config = if let Some(config_path) = config_path {
            tracing::info!("Loading configuration from {}", config_path);
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,chinese_namer=debug")
    /// - APP_LLM_API_URL: Chat-completions endpoint
    /// - APP_LLM_MODEL: Model identifier
    /// - APP_LLM_API_KEY: Provider credential (falls back to DEEPSEEK_API_KEY)
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Some(port) = lookup("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Some(level) = lookup("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Some(url) = lookup("APP_LLM_API_URL") {
            self.llm.api_url = url;
            tracing::info!("Override llm.api_url from env: {}", self.llm.api_url);
        }

        if let Some(model) = lookup("APP_LLM_MODEL") {
            self.llm.model = model;
            tracing::info!("Override llm.model from env: {}", self.llm.model);
        }

        if let Some(key) = lookup("APP_LLM_API_KEY").or_else(|| lookup("DEEPSEEK_API_KEY")) {
            self.llm.api_key = key;
            tracing::info!("Override llm.api_key from env");
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.llm.api_url.is_empty() {
            anyhow::bail!("llm.api_url cannot be empty");
        }

        if self.llm.api_key.is_empty() {
            anyhow::bail!(
                "llm.api_key is not set (set APP_LLM_API_KEY or DEEPSEEK_API_KEY, or update config.toml)"
            );
        }

        let sampling = &self.llm.sampling;
        if sampling.max_tokens == 0 {
            anyhow::bail!("llm.sampling.max_tokens must be > 0");
        }
        if sampling.temperature < 0.0 {
            anyhow::bail!("llm.sampling.temperature must be >= 0");
        }
        if sampling.top_p <= 0.0 || sampling.top_p > 1.0 {
            anyhow::bail!("llm.sampling.top_p must be in (0, 1]");
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "****" })
            .field("model", &self.model)
            .field("sampling", &self.sampling)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,chinese_namer=debug".to_string(),
            file: Some("logs/chinese-namer.log".to_string()),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self { enabled: false, web_root: "web".to_string() }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "deepseek-ai/DeepSeek-R1-Distill-Qwen-7B".to_string(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_tokens: 8192,
            enable_thinking: true,
            thinking_budget: 32768,
            min_p: 0.05,
            stop: Vec::new(),
            temperature: 0.6,
            top_p: 0.7,
            top_k: 50,
            frequency_penalty: 0.5,
            n: 1,
        }
    }
}
