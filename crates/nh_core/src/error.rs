use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("Rate limits exceeded. Please try again later.")]
    RateLimited,

    #[error("Payment required. Please add credits to continue.")]
    PaymentRequired,

    #[error("Upstream error: status {status}")]
    Upstream { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Maps a non-2xx upstream status onto the error taxonomy.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => Error::RateLimited,
            402 => Error::PaymentRequired,
            _ => Error::Upstream { status, body },
        }
    }

    /// Status code to hand back to the inbound caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::RateLimited => 429,
            Error::PaymentRequired => 402,
            _ => 500,
        }
    }
}
