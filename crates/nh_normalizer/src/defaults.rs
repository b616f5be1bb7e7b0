use chrono::{SecondsFormat, Utc};
use nh_core::{Article, ArticleSource, ProviderKind};
use serde_json::Value;

pub const DEFAULT_DESCRIPTION: &str = "Stay informed with the latest updates.";
pub const DEFAULT_CONTENT: &str = "Full details coming soon.";
pub const DEFAULT_URL: &str = "#";
pub const DEFAULT_CATEGORY: &str = "general";

const PLACEHOLDER_IMAGE_BASE: u64 = 1504711434969;

/// Placeholder image, offset by index so neighbouring cards differ.
pub fn placeholder_image(index: usize) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=800&q=80",
        PLACEHOLDER_IMAGE_BASE + index as u64
    )
}

/// Current time in the `2025-10-05T10:30:00.000Z` form.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads `key` as a usable string. Absent, null, non-string and blank values
/// all count as missing.
pub fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(non_blank)
}

pub fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Upstream record fields before defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<String>,
    pub category: Option<String>,
}

impl Candidate {
    /// Fills every missing field. `index` is the record's position upstream.
    pub fn into_article(self, index: usize, kind: ProviderKind) -> Article {
        let content = self
            .content
            .or_else(|| self.description.clone())
            .unwrap_or_else(|| DEFAULT_CONTENT.to_string());

        Article {
            title: self
                .title
                .unwrap_or_else(|| format!("Breaking News {}", index + 1)),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            content,
            source: ArticleSource::new(
                self.source
                    .unwrap_or_else(|| kind.default_source_name().to_string()),
            ),
            author: self.author,
            url: self.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            url_to_image: self.image.unwrap_or_else(|| placeholder_image(index)),
            published_at: self.published_at.unwrap_or_else(now_iso),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}
