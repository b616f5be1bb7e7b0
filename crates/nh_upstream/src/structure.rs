use std::fmt;

use async_trait::async_trait;
use nh_core::chat::{completions_url, ChatMessage, ChatRequest, ChatResponse};
use nh_core::{ArticleStructurer, Error, GatewayConfig, Result, StructuredContent};
use reqwest::Client;
use tracing::{debug, error};

use crate::providers::parse_base_url;
use crate::{http_client, read_response, send};

const SYSTEM_PROMPT: &str = r#"You are a news analyst. Restructure the article you are given into clear, well organized markdown with these sections:

## Summary
Two or three sentences covering the essential facts.

## Key Points
A bulleted list of the most important details.

## Background
Context a reader needs to understand why this matters.

## What's Next
Likely developments or open questions.

Use only information from the article. Do not invent quotes, figures or sources."#;

/// Sends an article to the chat-completion gateway for markdown structuring.
pub struct GatewayStructurer {
    client: Client,
    config: GatewayConfig,
}

impl GatewayStructurer {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: GatewayConfig) -> Result<Self> {
        parse_base_url(&config.base_url)?;
        Ok(Self { client, config })
    }
}

impl fmt::Debug for GatewayStructurer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayStructurer")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl ArticleStructurer for GatewayStructurer {
    async fn structure(&self, title: &str, content: &str) -> Result<StructuredContent> {
        let api_key = self.config.api_key()?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(format!("Title: {}\n\nContent:\n{}", title, content)),
            ],
        };

        let response = send(
            self.client
                .post(completions_url(&self.config.base_url))
                .bearer_auth(api_key)
                .json(&request),
        )
        .await?;
        let raw = read_response(response, "AI gateway").await?;

        let parsed: ChatResponse = serde_json::from_str(&raw.body).map_err(|e| {
            error!("Unreadable structuring response: {} ({})", raw.body, e);
            Error::Parse("AI gateway returned an unreadable response".to_string())
        })?;

        match parsed.into_text() {
            Some(markdown) => {
                debug!("Structured article {:?} ({} chars)", title, markdown.len());
                Ok(StructuredContent(markdown))
            }
            None => {
                error!("Structuring response had no content: {}", raw.body);
                Err(Error::Parse("No structured content returned".to_string()))
            }
        }
    }
}

/// Builds a markdown outline locally from the article's own sentences.
///
/// Needs no credential; handy for exercising the reader flow offline.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineStructurer;

impl OutlineStructurer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArticleStructurer for OutlineStructurer {
    async fn structure(&self, title: &str, content: &str) -> Result<StructuredContent> {
        let sentences: Vec<&str> = content
            .split(|c| c == '.' || c == '!' || c == '?')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return Err(Error::Parse("Nothing to structure".to_string()));
        }

        let mut markdown = format!("# {}\n\n## Summary\n{}.\n\n## Key Points\n", title.trim(), sentences[0]);
        for sentence in sentences.iter().skip(1).take(5) {
            markdown.push_str(&format!("- {}.\n", sentence));
        }
        Ok(StructuredContent(markdown))
    }
}
