//! A mounted chat widget session.
//!
//! Lifecycle decisions:
//!
//! - The transcript is created empty at mount and dropped with the session.
//! - Collapsing the widget does not cancel replies in flight; they are
//!   appended when they arrive and shown on the next expand.
//! - Closing (or dropping) the session aborts every reply in flight and
//!   discards its result.

use chatlet_core::models::message::Message;
use chatlet_core::models::props::WidgetProps;
use chatlet_core::view::WidgetView;
use chatlet_responder::client::ResponderClient;
use chatlet_responder::context::ContextDocument;
use tracing::{debug, info};

use crate::ordering::{Dispatcher, PendingReply, WidgetOptions};
use crate::state::SessionState;

pub struct ChatWidget {
    props: WidgetProps,
    context: ContextDocument,
    state: SessionState,
    dispatcher: Dispatcher,
}

impl ChatWidget {
    /// Mount a widget session.
    ///
    /// If `props.file_url` is set the context document is fetched here,
    /// once. A failed fetch is reported to the responder's diagnostics
    /// sink and the session runs without context.
    pub async fn mount(
        props: WidgetProps,
        responder: ResponderClient,
        options: WidgetOptions,
    ) -> Self {
        let context = match props.file_url.as_deref() {
            Some(url) => responder.fetch_context(url).await,
            None => ContextDocument::empty(),
        };

        let state = SessionState::default();
        let dispatcher = Dispatcher::new(
            options.ordering,
            responder,
            context.clone(),
            state.transcript.clone(),
        );

        info!(
            title = %props.title,
            has_context = !context.is_empty(),
            ordering = ?options.ordering,
            "chat widget mounted"
        );

        Self {
            props,
            context,
            state,
            dispatcher,
        }
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    pub fn context(&self) -> &ContextDocument {
        &self.context
    }

    pub async fn view(&self) -> WidgetView {
        *self.state.view.lock().await
    }

    pub async fn toggle(&self) -> WidgetView {
        let view = self.state.view.lock().await.toggle();
        debug!(?view, "widget toggled");
        view
    }

    pub async fn expand(&self) -> bool {
        self.state.view.lock().await.expand()
    }

    pub async fn collapse(&self) -> bool {
        self.state.view.lock().await.collapse()
    }

    /// Submit a user message.
    ///
    /// Empty or whitespace-only input is dropped without a record and
    /// returns `None`. Otherwise the user record is appended before this
    /// returns, and the reply is fetched in the background.
    pub async fn submit(&self, text: impl Into<String>) -> Option<PendingReply> {
        let text = text.into();

        {
            let mut transcript = self.state.transcript.lock().await;
            if transcript.append(Message::user(text.clone())).is_err() {
                debug!("ignoring empty submission");
                return None;
            }
        }

        Some(self.dispatcher.dispatch(text))
    }

    /// Snapshot of the transcript for rendering, oldest first.
    pub async fn transcript(&self) -> Vec<Message> {
        self.state.transcript.lock().await.all().to_vec()
    }

    /// The transcript as a JSON array, for web hosts.
    pub async fn transcript_json(&self) -> Result<String, chatlet_core::error::CoreError> {
        self.state.transcript.lock().await.to_json()
    }

    /// Tear the session down, aborting any replies still in flight.
    pub fn close(self) {
        let aborted = self.dispatcher.abort_all();
        info!(aborted, "chat widget closed");
    }
}
