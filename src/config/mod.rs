//! Application configuration

use serde::Deserialize;

use crate::domain::document::DEFAULT_MAX_DOCUMENT_BYTES;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ingestion: IngestionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Generation-service knobs. Defaults mirror the product's tuned values:
/// single-section calls get a 1024 output-token cap, the combined bulk call
/// twice that.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    pub bulk_max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestionConfig {
    /// Upload admission limit in bytes
    pub max_document_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            bulk_max_output_tokens: 2048,
        }
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.generation.model, "gemini-2.0-flash");
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.max_output_tokens, 1024);
        assert_eq!(config.generation.bulk_max_output_tokens, 2048);
        assert_eq!(config.ingestion.max_document_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": {"host": "127.0.0.1", "port": 8080}
        }))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generation.top_k, 40);
    }
}
