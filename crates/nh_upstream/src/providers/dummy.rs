use std::fmt;

use async_trait::async_trait;
use nh_core::{Error, ProviderKind, RawResponse, Result, UpstreamFetcher};

/// Serves a fixed reply without touching the network.
///
/// Used to normalize saved upstream bodies and to wire handlers in tests.
pub struct StaticFetcher {
    kind: ProviderKind,
    reply: Reply,
}

enum Reply {
    Body(String),
    Status(u16),
    MissingKey(String),
}

impl StaticFetcher {
    pub fn new(kind: ProviderKind, body: impl Into<String>) -> Self {
        Self { kind, reply: Reply::Body(body.into()) }
    }

    /// Replies as if the provider answered with a non-2xx `status`.
    pub fn failing(kind: ProviderKind, status: u16) -> Self {
        Self { kind, reply: Reply::Status(status) }
    }

    /// Replies as if no credential were configured.
    pub fn unconfigured(kind: ProviderKind, key_name: impl Into<String>) -> Self {
        Self { kind, reply: Reply::MissingKey(key_name.into()) }
    }
}

impl fmt::Debug for StaticFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticFetcher").field("kind", &self.kind).finish()
    }
}

#[async_trait]
impl UpstreamFetcher for StaticFetcher {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch(&self) -> Result<RawResponse> {
        match &self.reply {
            Reply::Body(body) => Ok(RawResponse::ok(body.clone())),
            Reply::Status(status) => Err(Error::from_status(*status, String::new())),
            Reply::MissingKey(name) => Err(Error::Config(format!("{} is not configured", name))),
        }
    }
}
