//! Service configuration types for Palaver.
//!
//! `ServiceConfig` represents the top-level `config.toml` that controls
//! which completion provider the service talks to and how. All fields have
//! sensible defaults so a missing or empty file still yields a working
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Palaver service.
///
/// Loaded from `~/.palaver/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Completion provider settings.
    #[serde(default)]
    pub provider: ProviderSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            provider: ProviderSettings::default(),
        }
    }
}

/// Settings for the OpenAI-compatible completion provider.
///
/// The provider is selected by pointing `base_url` and `model` at any
/// endpoint that speaks the OpenAI chat completions protocol. The API key
/// itself never lives in the file; `api_key_env` names the environment
/// variable to read it from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Human-readable provider name used in logs (e.g., "openai").
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier (e.g., "gpt-4o-mini").
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Hard deadline for a single completion request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_default_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.provider.name, "openai");
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.max_tokens, 1024);
        assert!((config.provider.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.provider.request_timeout_secs, 60);
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_service_config_deserialize_empty() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.request_timeout_secs, 60);
    }

    #[test]
    fn test_service_config_deserialize_partial_provider() {
        let toml_str = r#"
[provider]
model = "gpt-4o"
request_timeout_secs = 30
"#;
        let config: ServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "gpt-4o");
        assert_eq!(config.provider.request_timeout_secs, 30);
        // Unspecified fields keep their defaults.
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.max_tokens, 1024);
    }

    #[test]
    fn test_service_config_deserialize_other_provider() {
        let toml_str = r#"
[provider]
name = "mistral"
base_url = "https://api.mistral.ai/v1"
model = "mistral-large-latest"
api_key_env = "MISTRAL_API_KEY"
"#;
        let config: ServiceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.name, "mistral");
        assert_eq!(config.provider.base_url, "https://api.mistral.ai/v1");
        assert_eq!(config.provider.api_key_env, "MISTRAL_API_KEY");
    }

    #[test]
    fn test_service_config_serde_roundtrip() {
        let config = ServiceConfig {
            provider: ProviderSettings {
                name: "openai".to_string(),
                base_url: "http://localhost:8080/v1".to_string(),
                model: "test-model".to_string(),
                max_tokens: 256,
                temperature: 0.0,
                request_timeout_secs: 5,
                api_key_env: "TEST_KEY".to_string(),
            },
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.provider.base_url, "http://localhost:8080/v1");
        assert_eq!(parsed.provider.max_tokens, 256);
    }
}
