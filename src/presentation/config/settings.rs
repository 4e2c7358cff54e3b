use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub api_interface: ApiInterfaceSettings,
    pub http_client: HttpClientSettings,
    pub retriever: RetrieverSettings,
    pub chat_history: ChatHistorySettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `config/base.yaml`, `config/{environment}.yaml` and `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from("config", environment)
    }

    pub fn load_from(config_dir: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{}/base", config_dir)))
            .add_source(
                File::with_name(&format!("{}/{}", config_dir, environment.file_stem()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Downstream endpoints and the callback URLs handed to them.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiInterfaceSettings {
    pub extract_request_url: String,
    pub indexing_request_url: String,
    pub doc_del_request_url: String,
    pub doc_search_request_url: String,
    pub retriever_request_url: String,
    pub chat_llm_request_url: String,
    pub extract_callback_url: String,
    pub indexing_callback_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub verify_tls: bool,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            max_retries: 3,
            retry_backoff_ms: 300,
            verify_tls: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrieverSettings {
    /// Comma-separated RAG system ids whose chat queries carry FAQ categories.
    #[serde(default)]
    pub faq_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatHistorySettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
