use std::sync::Arc;
use std::time::Duration;

use nh_core::{ArticleStructurer, Config, Error, GatewayConfig, ProviderKind, RawResponse, Result, UpstreamFetcher};
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error};

pub mod providers;
pub mod structure;

#[cfg(test)]
pub(crate) mod test_server;

pub use providers::{AiGatewayFetcher, SearchApiFetcher, StaticFetcher};
pub use structure::{GatewayStructurer, OutlineStructurer};

/// Builds the fetcher for the configured headline provider.
pub fn create_fetcher(kind: ProviderKind, config: &Config) -> Result<Arc<dyn UpstreamFetcher>> {
    let fetcher: Arc<dyn UpstreamFetcher> = match kind {
        ProviderKind::AiGateway => Arc::new(AiGatewayFetcher::new(config.gateway.clone())?),
        ProviderKind::SearchApi => Arc::new(SearchApiFetcher::new(config.search.clone())?),
    };
    Ok(fetcher)
}

pub fn create_structurer(config: &GatewayConfig) -> Result<Arc<dyn ArticleStructurer>> {
    Ok(Arc::new(GatewayStructurer::new(config.clone())?))
}

pub(crate) fn http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Sends a request. Transport errors drop the URL since it may carry an
/// `api_key` query parameter.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    request.send().await.map_err(|e| Error::Http(e.without_url()))
}

/// Reads the body and maps non-2xx statuses onto the error taxonomy.
pub(crate) async fn read_response(response: Response, label: &str) -> Result<RawResponse> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| Error::Http(e.without_url()))?;
    classify_response(status, body, label)
}

pub fn classify_response(status: u16, body: String, label: &str) -> Result<RawResponse> {
    if (200..300).contains(&status) {
        debug!("{} response ({}): {}", label, status, body);
        return Ok(RawResponse { status, body });
    }

    error!("{} error: {} {}", label, status, body);
    Err(Error::from_status(status, body))
}

pub mod prelude {
    pub use super::{create_fetcher, create_structurer};
    pub use super::{AiGatewayFetcher, GatewayStructurer, SearchApiFetcher, StaticFetcher};
    pub use nh_core::{Error, RawResponse, Result, UpstreamFetcher};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        let response = classify_response(200, "{}".to_string(), "test").unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{}");
    }

    #[test]
    fn test_classify_failures() {
        assert!(matches!(classify_response(429, String::new(), "test"), Err(Error::RateLimited)));
        assert!(matches!(classify_response(402, String::new(), "test"), Err(Error::PaymentRequired)));
        assert!(matches!(
            classify_response(500, "oops".to_string(), "test"),
            Err(Error::Upstream { status: 500, .. })
        ));
        assert!(matches!(
            classify_response(404, String::new(), "test"),
            Err(Error::Upstream { status: 404, .. })
        ));
    }

    #[test]
    fn test_create_fetcher_kind() {
        let config = Config::default();
        assert_eq!(create_fetcher(ProviderKind::AiGateway, &config).unwrap().kind(), ProviderKind::AiGateway);
        assert_eq!(create_fetcher(ProviderKind::SearchApi, &config).unwrap().kind(), ProviderKind::SearchApi);
    }
}
