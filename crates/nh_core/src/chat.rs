//! Wire types for OpenAI-style chat-completion requests and replies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Only the parts of the reply we read; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first assistant message, as sent.
    pub fn into_message(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }

    /// First assistant message, if it carries any text.
    pub fn into_text(self) -> Option<String> {
        self.into_message().filter(|content| !content.trim().is_empty())
    }
}

pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message() {
        let reply: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"message":{"role":"assistant","content":"one"}},{"message":{"content":"two"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_message().as_deref(), Some("one"));
    }

    #[test]
    fn test_blank_text() {
        let reply: ChatResponse = serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert_eq!(reply.into_text(), None);

        let reply: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(reply.into_message(), None);
    }

    #[test]
    fn test_completions_url() {
        assert_eq!(completions_url("https://gw.test/v1/"), "https://gw.test/v1/chat/completions");
        assert_eq!(completions_url("https://gw.test/v1"), "https://gw.test/v1/chat/completions");
    }
}
