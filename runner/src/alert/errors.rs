use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid signing key: {0}")]
    SigningKey(String),
}
