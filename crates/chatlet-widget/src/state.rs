use std::sync::Arc;

use chatlet_core::transcript::Transcript;
use chatlet_core::view::WidgetView;
use tokio::sync::Mutex;

/// The mutable parts of a widget session, shared with background replies.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub transcript: Arc<Mutex<Transcript>>,
    pub view: Arc<Mutex<WidgetView>>,
}
