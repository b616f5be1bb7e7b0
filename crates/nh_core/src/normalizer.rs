use crate::types::{Article, ProviderKind};
use crate::Result;

/// Turns a raw upstream body into canonical articles.
///
/// Implementations only provide [`try_normalize`](Self::try_normalize) and
/// [`fallback`](Self::fallback); [`normalize`](Self::normalize) never fails and
/// substitutes the fallback set whenever parsing gives up.
pub trait ArticleNormalizer: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn try_normalize(&self, raw: &str) -> Result<Vec<Article>>;

    /// Built-in articles served when the upstream payload is unusable
    fn fallback(&self) -> Vec<Article>;

    fn normalize(&self, raw: &str) -> Vec<Article> {
        match self.try_normalize(raw) {
            Ok(articles) => articles,
            Err(e) => {
                tracing::error!(provider = %self.kind(), raw = %raw, "Error parsing upstream response: {}", e);
                self.fallback()
            }
        }
    }
}
