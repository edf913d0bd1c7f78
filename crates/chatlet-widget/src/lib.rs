//! chatlet-widget
//!
//! The headless widget session a rendering host drives: it owns the
//! transcript and the collapsed/expanded toggle, and sends each user
//! message to the responder in the background.

pub mod ordering;
pub mod state;
pub mod widget;

pub use ordering::{PendingReply, ReplyOrdering, WidgetOptions};
pub use widget::ChatWidget;
