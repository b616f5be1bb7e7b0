pub mod chat;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalizer;
pub mod structurer;
pub mod types;

pub use config::{Config, GatewayConfig, SearchApiConfig};
pub use error::Error;
pub use fetcher::UpstreamFetcher;
pub use normalizer::ArticleNormalizer;
pub use structurer::ArticleStructurer;
pub use types::{Article, ArticleSource, ProviderKind, RawResponse, StructuredContent};

pub type Result<T> = std::result::Result<T, Error>;
