use std::sync::Arc;
use nh_core::{ArticleNormalizer, ArticleStructurer, UpstreamFetcher};

pub struct AppState {
    pub fetcher: Arc<dyn UpstreamFetcher>,
    pub normalizer: Arc<dyn ArticleNormalizer>,
    pub structurer: Arc<dyn ArticleStructurer>,
}

impl AppState {
    /// Pairs the fetcher with the normalizer for its provider kind.
    pub fn new(fetcher: Arc<dyn UpstreamFetcher>, structurer: Arc<dyn ArticleStructurer>) -> Self {
        let normalizer = Arc::from(nh_normalizer::normalizer_for(fetcher.kind()));
        Self { fetcher, normalizer, structurer }
    }
}
