use thiserror::Error;

use crate::diagnostics::FailureKind;

#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("no API credential found in environment variable {var}")]
    MissingCredential { var: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("response did not contain a completion")]
    MissingCompletion,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl ResponderError {
    /// The diagnostic category this error is reported under.
    pub fn kind(&self) -> FailureKind {
        match self {
            ResponderError::MissingCredential { .. } => FailureKind::MissingCredential,
            ResponderError::Transport(_) => FailureKind::Transport,
            ResponderError::HttpStatus { .. } => FailureKind::HttpStatus,
            ResponderError::MissingCompletion | ResponderError::Serialization(_) => {
                FailureKind::MalformedResponse
            }
            ResponderError::Config(_) => FailureKind::Config,
        }
    }
}
