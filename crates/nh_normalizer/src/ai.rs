use nh_core::chat::ChatResponse;
use nh_core::{Article, ArticleNormalizer, Error, ProviderKind, Result};
use serde_json::Value;
use tracing::debug;

use crate::defaults::{non_blank, text_field, Candidate};
use crate::extract::extract_json_array;
use crate::fallback::{materialize, AI_GATEWAY_FALLBACK};

/// Normalizes chat-completion replies whose assistant message carries a JSON
/// array of article-like objects, usually wrapped in prose or a code fence.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiGatewayNormalizer;

impl AiGatewayNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Pulls the assistant message text out of the chat-completion envelope.
    pub fn message_text(raw: &str) -> Result<String> {
        let envelope: ChatResponse = serde_json::from_str(raw)?;
        envelope
            .into_message()
            .ok_or_else(|| Error::Parse("Response has no assistant message".to_string()))
    }

    /// Parses the article array out of free text.
    pub fn parse_message(text: &str) -> Result<Vec<Article>> {
        let items = match extract_json_array(text) {
            Some(items) => items,
            None => match serde_json::from_str::<Value>(text)? {
                Value::Array(items) => items,
                _ => return Err(Error::Parse("Response is not an array".to_string())),
            },
        };

        if items.is_empty() {
            return Err(Error::Parse("Response array is empty".to_string()));
        }

        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| candidate(item).into_article(index, ProviderKind::AiGateway))
            .collect())
    }
}

fn candidate(item: &Value) -> Candidate {
    // The prompt asks for a plain string, but models sometimes echo the
    // canonical `{ "name": ... }` shape back.
    let source = item.get("source").and_then(|source| match source {
        Value::Object(_) => text_field(source, "name"),
        other => non_blank(other),
    });

    Candidate {
        title: text_field(item, "title"),
        description: text_field(item, "description"),
        content: text_field(item, "content"),
        source,
        author: text_field(item, "author"),
        url: text_field(item, "url"),
        image: text_field(item, "urlToImage"),
        published_at: text_field(item, "publishedAt"),
        category: text_field(item, "category"),
    }
}

impl ArticleNormalizer for AiGatewayNormalizer {
    fn kind(&self) -> ProviderKind {
        ProviderKind::AiGateway
    }

    fn try_normalize(&self, raw: &str) -> Result<Vec<Article>> {
        let text = Self::message_text(raw)?;
        debug!("Raw AI response: {}", text);
        Self::parse_message(&text)
    }

    fn fallback(&self) -> Vec<Article> {
        materialize(&AI_GATEWAY_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{placeholder_image, DEFAULT_CONTENT, DEFAULT_DESCRIPTION};
    use serde_json::json;

    fn envelope(content: &str) -> String {
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    #[test]
    fn test_title_only_scenario() {
        let articles = AiGatewayNormalizer.normalize(&envelope("Here you go:\n[{\"title\":\"X\"}]"));
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.title, "X");
        assert_eq!(article.description, DEFAULT_DESCRIPTION);
        assert_eq!(article.content, DEFAULT_CONTENT);
        assert_eq!(article.source.name, "India News");
        assert_eq!(article.url, "#");
        assert_eq!(article.category, "general");
        assert_eq!(article.author, None);
    }

    #[test]
    fn test_full_record_passes_through() {
        let text = r#"```json
[
  {
    "title": "Monsoon arrives early in Kerala",
    "description": "IMD confirms onset.",
    "content": "The monsoon reached Kerala on Friday.",
    "source": "The Hindu",
    "author": "Weather Desk",
    "url": "https://example.com/monsoon",
    "urlToImage": "https://example.com/monsoon.jpg",
    "category": "science",
    "publishedAt": "2025-10-05T10:30:00Z"
  }
]
```"#;
        let articles = AiGatewayNormalizer.normalize(&envelope(text));
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.title, "Monsoon arrives early in Kerala");
        assert_eq!(article.description, "IMD confirms onset.");
        assert_eq!(article.content, "The monsoon reached Kerala on Friday.");
        assert_eq!(article.source.name, "The Hindu");
        assert_eq!(article.author.as_deref(), Some("Weather Desk"));
        assert_eq!(article.url, "https://example.com/monsoon");
        assert_eq!(article.url_to_image, "https://example.com/monsoon.jpg");
        assert_eq!(article.category, "science");
        assert_eq!(article.published_at, "2025-10-05T10:30:00Z");
    }

    #[test]
    fn test_order_and_image_index() {
        let text = r#"[{"title":"A"},{"title":"B","description":"only desc"},{}]"#;
        let articles = AiGatewayNormalizer.normalize(&envelope(text));
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "Breaking News 3"]);
        assert_eq!(articles[1].content, "only desc");
        assert_eq!(articles[0].url_to_image, placeholder_image(0));
        assert_eq!(articles[2].url_to_image, placeholder_image(2));
    }

    #[test]
    fn test_source_object_and_non_object_elements() {
        let text = r#"[{"title":"A","source":{"name":"NDTV"}}, "stray", 42]"#;
        let articles = AiGatewayNormalizer.normalize(&envelope(text));
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].source.name, "NDTV");
        assert_eq!(articles[1].title, "Breaking News 2");
        assert_eq!(articles[2].source.name, "India News");
    }

    #[test]
    fn test_malformed_inputs_fall_back() {
        let before = chrono::Utc::now();
        let inputs = vec![
            String::new(),
            "not json at all".to_string(),
            envelope("not json at all"),
            envelope("{\"title\":\"X\"}"),
            envelope("[{\"title\":\"A\"},{\"title\":\"B\""),
            envelope("[]"),
            json!({"choices": []}).to_string(),
            json!({"error": "boom"}).to_string(),
        ];

        for input in inputs {
            let articles = AiGatewayNormalizer.normalize(&input);
            assert_eq!(articles.len(), 3, "input: {}", input);
            assert_eq!(articles[0].title, "India's Technology Sector Shows Strong Growth in 2025");
            let stamped = chrono::DateTime::parse_from_rfc3339(&articles[0].published_at).unwrap();
            assert!(stamped >= before - chrono::Duration::seconds(1));
        }
    }

    #[test]
    fn test_try_normalize_reports_failure() {
        assert!(matches!(
            AiGatewayNormalizer.try_normalize(&envelope("{\"title\":\"X\"}")),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            AiGatewayNormalizer.try_normalize("not json at all"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_whole_text_array() {
        let articles = AiGatewayNormalizer::parse_message("[{\"title\":\"Only\"}]").unwrap();
        assert_eq!(articles[0].title, "Only");
    }

    #[test]
    fn test_idempotent_apart_from_timestamps() {
        let raw = envelope(r#"[{"title":"A","publishedAt":"2025-10-05T10:30:00Z"},{"title":"B"}]"#);
        let first = AiGatewayNormalizer.normalize(&raw);
        let mut second = AiGatewayNormalizer.normalize(&raw);
        assert_eq!(first[0], second[0]);
        second[1].published_at = first[1].published_at.clone();
        assert_eq!(first[1], second[1]);
    }
}
