//! Context document and prompt construction.
//!
//! The context document is plain text fetched once when the widget mounts.
//! It is prepended verbatim to every prompt so the completion model answers
//! from it. It is never refreshed for the life of the session.

use std::sync::Arc;

use tracing::info;

use crate::error::ResponderError;

/// Read-only grounding text shared by every request in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDocument(Option<Arc<str>>);

impl ContextDocument {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self(None)
        } else {
            Self(Some(Arc::from(text)))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Fetch the context document with a plain GET, reading the body as text.
pub async fn fetch_context_document(
    http: &reqwest::Client,
    url: &str,
) -> Result<ContextDocument, ResponderError> {
    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ResponderError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    info!(url, bytes = text.len(), "fetched context document");

    Ok(ContextDocument::new(text))
}

/// Build the prompt sent to the completion endpoint.
///
/// With a context document the prompt reads:
///
/// ```text
/// <context>
///
/// Question: <user text>
/// Answer:
/// ```
///
/// Without one, the context block and the blank line are left out.
pub fn build_prompt(context: &ContextDocument, user_text: &str) -> String {
    let mut prompt = String::new();

    if !context.is_empty() {
        prompt.push_str(context.as_str());
        prompt.push_str("\n\n");
    }

    prompt.push_str("Question: ");
    prompt.push_str(user_text);
    prompt.push_str("\nAnswer:");
    prompt
}
