//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into semantic [`InputEvent`]s. Nothing here knows about
//! the engine; the binary resolves camera turns and forwards actions.

pub mod map;

pub use tris3d_types as types;

pub use map::{handle_key_event, should_quit, InputEvent};
