use std::fmt;

use async_trait::async_trait;
use nh_core::chat::{completions_url, ChatMessage, ChatRequest};
use nh_core::{GatewayConfig, ProviderKind, RawResponse, Result, UpstreamFetcher};
use reqwest::Client;
use tracing::info;

use super::parse_base_url;
use crate::{http_client, read_response, send};

/// Asks a chat-completion gateway for today's trending stories as JSON.
pub struct AiGatewayFetcher {
    client: Client,
    config: GatewayConfig,
}

impl AiGatewayFetcher {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: GatewayConfig) -> Result<Self> {
        parse_base_url(&config.base_url)?;
        Ok(Self { client, config })
    }

    pub fn system_prompt(&self) -> String {
        let count = self.config.article_count;
        format!(
            r#"You are a news aggregator. Find the top {count} trending news stories from India right now.

For each story provide:
- title: a clear, engaging headline (max 100 chars)
- description: a brief summary (2-3 sentences, max 200 chars)
- content: the full article (3-4 paragraphs with details)
- source: the news source name (e.g. "The Times of India", "NDTV", "The Hindu")
- category: one of [politics, business, technology, sports, entertainment, health, science]
- publishedAt: today's date in ISO 8601 format

Return ONLY a valid JSON array with exactly {count} articles. No additional text or markdown.

Example:
[
  {{
    "title": "Breaking: Major development in...",
    "description": "Brief summary of the news...",
    "content": "Full article content with multiple paragraphs...",
    "source": "The Times of India",
    "category": "politics",
    "publishedAt": "2025-10-05T10:30:00Z"
  }}
]"#
        )
    }

    pub fn user_prompt(&self) -> String {
        format!(
            "Fetch the latest {} trending news stories from India right now. Focus on diverse categories and recent events.",
            self.config.article_count
        )
    }
}

impl fmt::Debug for AiGatewayFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiGatewayFetcher")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl UpstreamFetcher for AiGatewayFetcher {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AiGateway
    }

    async fn fetch(&self) -> Result<RawResponse> {
        let api_key = self.config.api_key()?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt()),
                ChatMessage::user(self.user_prompt()),
            ],
        };

        info!("Requesting {} articles from {}", self.config.article_count, self.config.model);
        let response = send(
            self.client
                .post(completions_url(&self.config.base_url))
                .bearer_auth(api_key)
                .json(&request),
        )
        .await?;

        read_response(response, "AI gateway").await
    }
}
