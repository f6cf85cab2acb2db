//! Editor session state as one value with pure transitions.
//!
//! `EditorState::apply` takes the old state and an event and returns the new
//! state; nothing else mutates it.

mod event;
mod state;

pub use event::SessionEvent;
pub use state::{Capabilities, EditorState, Tool};
