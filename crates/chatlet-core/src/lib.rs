//! chatlet-core
//!
//! Pure domain types for the chat widget: message records, the transcript
//! store, widget props, and the collapsed/expanded view state.
//! No network dependency — this is the shared vocabulary of the widget.

pub mod error;
pub mod models;
pub mod transcript;
pub mod view;
