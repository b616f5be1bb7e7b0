use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical, fully defaulted news item as served to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    pub source: ArticleSource,
    pub author: Option<String>,
    pub url: String,
    pub url_to_image: String,
    pub published_at: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

impl ArticleSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Markdown produced by the structuring pass. Passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredContent(pub String);

impl StructuredContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Successful upstream reply, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    AiGateway,
    SearchApi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::AiGateway => "ai-gateway",
            ProviderKind::SearchApi => "search-api",
        }
    }

    /// Source name used when an upstream record carries none.
    pub fn default_source_name(&self) -> &'static str {
        match self {
            ProviderKind::AiGateway => "India News",
            ProviderKind::SearchApi => "News Source",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ai" | "ai-gateway" | "gateway" => Ok(ProviderKind::AiGateway),
            "search" | "search-api" | "serpapi" => Ok(ProviderKind::SearchApi),
            other => Err(format!("Unknown provider: {} (expected ai or search)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article {
            title: "Title".to_string(),
            description: "Description".to_string(),
            content: "Content".to_string(),
            source: ArticleSource::new("NDTV"),
            author: None,
            url: "#".to_string(),
            url_to_image: "https://example.com/a.jpg".to_string(),
            published_at: "2025-10-05T10:30:00Z".to_string(),
            category: "general".to_string(),
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["urlToImage"], "https://example.com/a.jpg");
        assert_eq!(json["publishedAt"], "2025-10-05T10:30:00Z");
        assert_eq!(json["source"]["name"], "NDTV");
        assert!(json["author"].is_null());
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!("ai".parse::<ProviderKind>().unwrap(), ProviderKind::AiGateway);
        assert_eq!("Search".parse::<ProviderKind>().unwrap(), ProviderKind::SearchApi);
        assert_eq!("search-api".parse::<ProviderKind>().unwrap(), ProviderKind::SearchApi);
        assert!("rss".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_structured_content_is_transparent() {
        let content = StructuredContent("## Summary".to_string());
        assert_eq!(serde_json::to_string(&content).unwrap(), "\"## Summary\"");
    }
}
