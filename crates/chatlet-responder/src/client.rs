//! The responder client: one user message in, at most one bot message out.

use std::sync::Arc;

use chatlet_core::models::message::Message;
use tracing::info;

use crate::completion::request_completion;
use crate::config::ResponderConfig;
use crate::context::{ContextDocument, build_prompt, fetch_context_document};
use crate::diagnostics::{Diagnostic, DiagnosticSink, FailureKind, TracingSink};
use crate::error::ResponderError;

#[derive(Clone)]
pub struct ResponderClient {
    http: reqwest::Client,
    config: Arc<ResponderConfig>,
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for ResponderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderClient")
            .field("endpoint", &self.config.endpoint)
            .field("model", &self.config.model)
            .field("credentials", &self.config.credential_hint())
            .finish_non_exhaustive()
    }
}

impl ResponderClient {
    pub fn new(config: ResponderConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            sink,
        }
    }

    /// A client that reports failures through `tracing`.
    pub fn with_tracing(config: ResponderConfig) -> Self {
        Self::new(config, Arc::new(TracingSink))
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Ask the completion endpoint to reply to `user_text`.
    ///
    /// Returns the bot message on success. On any failure the error is
    /// reported to the diagnostics sink and `None` is returned; nothing is
    /// retried.
    pub async fn respond(&self, user_text: &str, context: &ContextDocument) -> Option<Message> {
        match self.try_respond(user_text, context).await {
            Ok(message) => Some(message),
            Err(e) => {
                self.sink.report(&Diagnostic::new(e.kind(), e.to_string()));
                None
            }
        }
    }

    /// Like [`ResponderClient::respond`] but hands the error back instead
    /// of reporting it.
    pub async fn try_respond(
        &self,
        user_text: &str,
        context: &ContextDocument,
    ) -> Result<Message, ResponderError> {
        let prompt = build_prompt(context, user_text);
        let completion = request_completion(&self.http, &self.config, &prompt).await?;
        let text = completion.trim();

        info!(reply_len = text.len(), "completion received");

        Ok(Message::bot(text))
    }

    /// Fetch the context document once. A failed fetch is reported and an
    /// empty document is returned so the session can carry on without it.
    pub async fn fetch_context(&self, url: &str) -> ContextDocument {
        match fetch_context_document(&self.http, url).await {
            Ok(document) => document,
            Err(e) => {
                self.sink.report(&Diagnostic::new(
                    FailureKind::ContextFetch,
                    format!("failed to fetch context document from {url}: {e}"),
                ));
                ContextDocument::empty()
            }
        }
    }
}
