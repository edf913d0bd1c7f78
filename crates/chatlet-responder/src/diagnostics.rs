//! Operator-facing diagnostics.
//!
//! Responder failures never reach the end user. They are handed to a
//! [`DiagnosticSink`] injected at construction, and the exchange ends
//! without a bot reply.

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingCredential,
    Transport,
    HttpStatus,
    MalformedResponse,
    ContextFetch,
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: FailureKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        warn!(
            kind = ?diagnostic.kind,
            message = %diagnostic.message,
            "responder exchange failed"
        );
    }
}

/// Keeps every diagnostic in memory, in the order reported.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn kinds(&self) -> Vec<FailureKind> {
        self.entries().into_iter().map(|d| d.kind).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic.clone());
        }
    }
}
