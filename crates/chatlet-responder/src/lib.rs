//! chatlet-responder
//!
//! The widget's responder: builds a prompt from the user's message and the
//! context document, sends it to a text-completion endpoint, and turns the
//! result into a bot message. Failures go to a diagnostics sink.

pub mod client;
pub mod completion;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
