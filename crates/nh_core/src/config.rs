use crate::{Error, ProviderKind, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_GATEWAY_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_ARTICLE_COUNT: usize = 12;
pub const DEFAULT_SEARCH_URL: &str = "https://serpapi.com/search.json";

/// Settings for the chat-completion gateway used for headlines and structuring.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    /// Name of the setting the key is read from, used in error messages.
    pub api_key_name: String,
    pub base_url: String,
    pub model: String,
    pub article_count: usize,
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_name: "AI_GATEWAY_API_KEY".to_string(),
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_GATEWAY_MODEL.to_string(),
            article_count: DEFAULT_ARTICLE_COUNT,
            timeout: None,
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("article_count", &self.article_count)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GatewayConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        require_key(self.api_key.as_deref(), &self.api_key_name)
    }
}

/// Settings for the search-engine news API.
#[derive(Clone)]
pub struct SearchApiConfig {
    pub api_key: Option<String>,
    pub api_key_name: String,
    pub base_url: String,
    pub query: String,
    pub region: String,
    pub language: String,
    pub timeout: Option<Duration>,
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_name: "SEARCH_API_KEY".to_string(),
            base_url: DEFAULT_SEARCH_URL.to_string(),
            query: "India".to_string(),
            region: "in".to_string(),
            language: "en".to_string(),
            timeout: None,
        }
    }
}

impl fmt::Debug for SearchApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchApiConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("query", &self.query)
            .field("region", &self.region)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SearchApiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_key(&self) -> Result<&str> {
        require_key(self.api_key.as_deref(), &self.api_key_name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderKind,
    pub gateway: GatewayConfig,
    pub search: SearchApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::AiGateway,
            gateway: GatewayConfig::default(),
            search: SearchApiConfig::default(),
        }
    }
}

fn require_key<'a>(key: Option<&'a str>, name: &str) -> Result<&'a str> {
    match key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::Config(format!("{} is not configured", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let config = GatewayConfig::default();
        let err = config.api_key().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "AI_GATEWAY_API_KEY is not configured");
    }

    #[test]
    fn test_blank_key_is_config_error() {
        let config = SearchApiConfig::default().with_api_key("   ");
        assert!(matches!(config.api_key(), Err(Error::Config(_))));
    }

    #[test]
    fn test_key_present() {
        let config = GatewayConfig::default().with_api_key("test-key");
        assert_eq!(config.api_key().unwrap(), "test-key");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = SearchApiConfig::default().with_api_key("secret-value");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
