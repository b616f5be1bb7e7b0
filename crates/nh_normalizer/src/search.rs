use chrono::{DateTime, SecondsFormat, Utc};
use nh_core::{Article, ArticleNormalizer, Error, ProviderKind, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::defaults::{non_blank, text_field, Candidate};
use crate::fallback::{materialize, SEARCH_API_FALLBACK};

pub const MAX_RESULTS: usize = 20;

/// Normalizes a search-engine news document (`news_results` list).
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchApiNormalizer;

impl SearchApiNormalizer {
    pub fn new() -> Self {
        Self
    }
}

/// Accepts RFC 3339 as-is and converts the search engine's
/// `10/05/2025, 07:00 AM, +0000 UTC` form. Anything else is dropped.
pub fn parse_result_date(date: &str) -> Option<String> {
    let date = date.trim();
    if DateTime::parse_from_rfc3339(date).is_ok() {
        return Some(date.to_string());
    }

    let trimmed = date.trim_end_matches("UTC").trim_end();
    DateTime::parse_from_str(trimmed, "%m/%d/%Y, %I:%M %p, %z")
        .ok()
        .map(|parsed| {
            parsed
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
}

fn candidate(entry: &Value) -> Candidate {
    // Grouped "top story" entries keep their lead story under `highlight`.
    let entry = match entry.get("highlight") {
        Some(highlight) if highlight.is_object() && text_field(entry, "title").is_none() => highlight,
        _ => entry,
    };

    let source = entry.get("source");
    let snippet = text_field(entry, "snippet");

    Candidate {
        title: text_field(entry, "title"),
        description: snippet.clone(),
        content: snippet,
        source: source.and_then(|source| text_field(source, "name")),
        author: source
            .and_then(|source| source.get("authors"))
            .and_then(Value::as_array)
            .and_then(|authors| authors.iter().find_map(non_blank)),
        url: text_field(entry, "link"),
        image: text_field(entry, "thumbnail").or_else(|| text_field(entry, "thumbnail_small")),
        published_at: text_field(entry, "date").and_then(|date| parse_result_date(&date)),
        category: None,
    }
}

impl ArticleNormalizer for SearchApiNormalizer {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SearchApi
    }

    fn try_normalize(&self, raw: &str) -> Result<Vec<Article>> {
        let document: Value = serde_json::from_str(raw)?;
        debug!("Raw search response: {}", raw);

        let results = match document.get("news_results") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(results)) => results.as_slice(),
            Some(_) => return Err(Error::Parse("news_results is not a list".to_string())),
        };

        if results.len() < MAX_RESULTS {
            info!("Search API returned {} results (fewer than {})", results.len(), MAX_RESULTS);
        }

        Ok(results
            .iter()
            .take(MAX_RESULTS)
            .enumerate()
            .map(|(index, entry)| candidate(entry).into_article(index, ProviderKind::SearchApi))
            .collect())
    }

    fn fallback(&self) -> Vec<Article> {
        materialize(&SEARCH_API_FALLBACK)
    }
}
