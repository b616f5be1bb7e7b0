use nh_core::{ArticleNormalizer, ProviderKind};

pub mod ai;
pub mod defaults;
pub mod extract;
pub mod fallback;
pub mod search;

pub use ai::AiGatewayNormalizer;
pub use search::SearchApiNormalizer;

/// Picks the normalizer matching the upstream shape.
pub fn normalizer_for(kind: ProviderKind) -> Box<dyn ArticleNormalizer> {
    match kind {
        ProviderKind::AiGateway => Box::new(AiGatewayNormalizer::new()),
        ProviderKind::SearchApi => Box::new(SearchApiNormalizer::new()),
    }
}

pub mod prelude {
    pub use super::normalizer_for;
    pub use super::{AiGatewayNormalizer, SearchApiNormalizer};
    pub use nh_core::{Article, ArticleNormalizer, ProviderKind};
}
