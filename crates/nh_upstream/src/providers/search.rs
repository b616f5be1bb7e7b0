use std::fmt;

use async_trait::async_trait;
use nh_core::{ProviderKind, RawResponse, Result, SearchApiConfig, UpstreamFetcher};
use reqwest::Client;
use tracing::info;
use url::Url;

use super::parse_base_url;
use crate::{http_client, read_response, send};

/// Queries a Google News search endpoint for the configured topic and region.
pub struct SearchApiFetcher {
    client: Client,
    config: SearchApiConfig,
}

impl SearchApiFetcher {
    pub fn new(config: SearchApiConfig) -> Result<Self> {
        let client = http_client(config.timeout)?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: SearchApiConfig) -> Result<Self> {
        parse_base_url(&config.base_url)?;
        Ok(Self { client, config })
    }

    fn request_url(&self, api_key: &str) -> Result<Url> {
        let mut url = parse_base_url(&self.config.base_url)?;
        url.query_pairs_mut()
            .append_pair("engine", "google_news")
            .append_pair("q", &self.config.query)
            .append_pair("gl", &self.config.region)
            .append_pair("hl", &self.config.language)
            .append_pair("api_key", api_key);
        Ok(url)
    }
}

impl fmt::Debug for SearchApiFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchApiFetcher")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl UpstreamFetcher for SearchApiFetcher {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SearchApi
    }

    async fn fetch(&self) -> Result<RawResponse> {
        let api_key = self.config.api_key()?;
        let url = self.request_url(api_key)?;

        info!(
            "Searching news for {:?} (region {}, language {})",
            self.config.query, self.config.region, self.config.language
        );
        let response = send(self.client.get(url)).await?;

        read_response(response, "Search API").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use nh_core::Error;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn config(base_url: &str) -> SearchApiConfig {
        SearchApiConfig {
            base_url: base_url.to_string(),
            ..SearchApiConfig::default()
        }
        .with_api_key("serp-key")
    }

    #[test]
    fn test_request_url() {
        let fetcher = SearchApiFetcher::new(config("https://serpapi.com/search.json")).unwrap();
        let url = fetcher.request_url("serp-key").unwrap();
        let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["engine"], "google_news");
        assert_eq!(pairs["q"], "India");
        assert_eq!(pairs["gl"], "in");
        assert_eq!(pairs["hl"], "en");
        assert_eq!(pairs["api_key"], "serp-key");
    }

    #[tokio::test]
    async fn test_missing_key() {
        let fetcher = SearchApiFetcher::new(SearchApiConfig::default()).unwrap();
        let err = fetcher.fetch().await.unwrap_err();
        assert_eq!(err.to_string(), "SEARCH_API_KEY is not configured");
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let router = Router::new().route(
            "/search.json",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "search_parameters": params,
                    "news_results": [{ "title": "Story" }]
                }))
            }),
        );
        let base_url = test_server::spawn(router).await;

        let fetcher = SearchApiFetcher::new(config(&format!("{}/search.json", base_url))).unwrap();
        let response = fetcher.fetch().await.unwrap();
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["search_parameters"]["q"], "India");
        assert_eq!(body["news_results"][0]["title"], "Story");
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let router = Router::new().route("/search.json", get(|| async { StatusCode::TOO_MANY_REQUESTS }));
        let base_url = test_server::spawn(router).await;

        let fetcher = SearchApiFetcher::new(config(&format!("{}/search.json", base_url))).unwrap();
        assert!(matches!(fetcher.fetch().await, Err(Error::RateLimited)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_key() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = SearchApiConfig {
            base_url: format!("http://{}/search.json", addr),
            ..SearchApiConfig::default()
        }
        .with_api_key("SECRET123");
        let fetcher = SearchApiFetcher::new(config).unwrap();

        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(!err.to_string().contains("SECRET123"), "{}", err);
        assert!(!format!("{:?}", err).contains("SECRET123"));
    }
}
