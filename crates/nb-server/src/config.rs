//! Service configuration.
//!
//! Loaded once at startup from an optional TOML file merged with
//! `NEWSBRIEF_`-prefixed environment variables; the environment wins.
//! Nested keys use a double underscore in the environment, e.g.
//! `NEWSBRIEF_OPENAI__API_KEY` sets `openai.api_key`.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub openai: OpenAIConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// Model used for every completion in a run.
    #[serde(default = "default_model")]
    pub model: String,
    /// Empty means unset; the service refuses to start without one.
    #[serde(default)]
    pub api_key: String,
    /// Sampling temperature; absent means provider default.
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_search_base_url() -> String {
    nb_tools::DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            temperature: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("NEWSBRIEF_").split("__"))
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert!(config.openai.api_key.is_empty());
        assert!(config.openai.temperature.is_none());
        assert_eq!(config.search.base_url, nb_tools::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                r#"
                [server]
                port = 9090

                [openai]
                api_key = "sk-test"
                temperature = 0.3
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.openai.temperature, Some(0.3));
    }
}
