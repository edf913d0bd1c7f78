//! How background replies are scheduled and in what order they land.

use std::sync::{Arc, Mutex as StdMutex};

use chatlet_core::transcript::Transcript;
use chatlet_responder::client::ResponderClient;
use chatlet_responder::context::ContextDocument;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::task::AbortHandle;
use tracing::debug;

/// Order in which bot replies are appended to the transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrdering {
    /// Every message is sent straight away and replies are appended as
    /// they arrive. Two messages in flight may be answered out of order.
    #[default]
    Completion,
    /// Messages wait in a per-conversation queue and are sent one at a
    /// time, so replies follow submission order.
    Submission,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WidgetOptions {
    #[serde(default)]
    pub ordering: ReplyOrdering,
}

impl WidgetOptions {
    pub fn ordered() -> Self {
        Self {
            ordering: ReplyOrdering::Submission,
        }
    }
}

/// Handle to a reply that is being fetched in the background.
#[derive(Debug)]
pub struct PendingReply {
    done: oneshot::Receiver<bool>,
}

impl PendingReply {
    /// Wait for the exchange to finish. Resolves to `true` if a bot record
    /// was appended, `false` if the exchange failed or the session closed.
    pub async fn replied(self) -> bool {
        self.done.await.unwrap_or(false)
    }
}

struct Exchange {
    text: String,
    done: oneshot::Sender<bool>,
}

#[derive(Clone)]
struct ExchangeRunner {
    responder: ResponderClient,
    context: ContextDocument,
    transcript: Arc<Mutex<Transcript>>,
}

impl ExchangeRunner {
    async fn run(&self, exchange: Exchange) {
        let appended = match self.responder.respond(&exchange.text, &self.context).await {
            Some(reply) => self.transcript.lock().await.append(reply).is_ok(),
            None => false,
        };
        debug!(appended, "exchange finished");
        // The caller may have dropped its handle.
        let _ = exchange.done.send(appended);
    }
}

/// Sends user messages to the responder according to a [`ReplyOrdering`]
/// and tracks the background tasks so they can be aborted on close.
pub(crate) struct Dispatcher {
    runner: ExchangeRunner,
    queue: Option<mpsc::UnboundedSender<Exchange>>,
    tasks: StdMutex<Vec<AbortHandle>>,
}

impl Dispatcher {
    /// Must be called from within a tokio runtime.
    pub(crate) fn new(
        ordering: ReplyOrdering,
        responder: ResponderClient,
        context: ContextDocument,
        transcript: Arc<Mutex<Transcript>>,
    ) -> Self {
        let runner = ExchangeRunner {
            responder,
            context,
            transcript,
        };

        let mut tasks = Vec::new();
        let queue = match ordering {
            ReplyOrdering::Completion => None,
            ReplyOrdering::Submission => {
                let (tx, mut rx) = mpsc::unbounded_channel::<Exchange>();
                let worker = runner.clone();
                let handle = tokio::spawn(async move {
                    while let Some(exchange) = rx.recv().await {
                        worker.run(exchange).await;
                    }
                });
                tasks.push(handle.abort_handle());
                Some(tx)
            }
        };

        Self {
            runner,
            queue,
            tasks: StdMutex::new(tasks),
        }
    }

    pub(crate) fn dispatch(&self, text: String) -> PendingReply {
        let (done, rx) = oneshot::channel();
        let exchange = Exchange { text, done };

        match &self.queue {
            Some(queue) => {
                // A send error means the worker was aborted; dropping the
                // exchange resolves the pending reply to `false`.
                let _ = queue.send(exchange);
            }
            None => {
                let runner = self.runner.clone();
                let handle = tokio::spawn(async move { runner.run(exchange).await });
                if let Ok(mut tasks) = self.tasks.lock() {
                    tasks.retain(|t| !t.is_finished());
                    tasks.push(handle.abort_handle());
                }
            }
        }

        PendingReply { done: rx }
    }

    /// Abort every exchange still in flight. Their results are discarded.
    pub(crate) fn abort_all(&self) -> usize {
        let Ok(mut tasks) = self.tasks.lock() else {
            return 0;
        };
        let mut aborted = 0;
        for task in tasks.drain(..) {
            if !task.is_finished() {
                aborted += 1;
            }
            task.abort();
        }
        aborted
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.abort_all();
    }
}
