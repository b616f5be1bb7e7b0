use nh_core::{Error, Result};
use url::Url;

pub mod dummy;
pub mod gateway;
pub mod search;

pub use dummy::StaticFetcher;
pub use gateway::AiGatewayFetcher;
pub use search::SearchApiFetcher;

pub(crate) fn parse_base_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::Config(format!("Invalid upstream URL {}: {}", url, e)))
}
