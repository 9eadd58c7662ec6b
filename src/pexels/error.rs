use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Token cannot be used as an Authorization header")]
    InvalidToken,

    #[error("PEXELS_API_KEY is not set")]
    MissingToken,

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Missing or invalid X-Ratelimit-Remaining header: {0:?}")]
    RateLimitHeader(Option<String>),

    #[error("Failed to parse response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
