use async_trait::async_trait;
use crate::types::{ProviderKind, RawResponse};
use crate::Result;

#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    /// Which upstream shape this fetcher returns
    fn kind(&self) -> ProviderKind;

    /// Issues a single request to the provider and returns the 2xx body.
    /// Non-2xx replies are mapped through [`crate::Error::from_status`].
    async fn fetch(&self) -> Result<RawResponse>;
}
