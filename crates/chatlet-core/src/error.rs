use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("user message text is empty")]
    EmptyMessage,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
