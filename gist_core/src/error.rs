use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chat completion API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("chat completion returned no message content")]
    EmptyResponse,
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type GistResult<T> = Result<T, GistError>;
