use async_trait::async_trait;
use crate::types::StructuredContent;
use crate::Result;

#[async_trait]
pub trait ArticleStructurer: Send + Sync {
    /// Reformat an article into markdown analysis
    async fn structure(&self, title: &str, content: &str) -> Result<StructuredContent>;
}
