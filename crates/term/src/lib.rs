//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget/layout
//! libraries and instead renders into a framebuffer that is diffed and flushed to the
//! terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the 3D volume as camera-relative projections from a snapshot
//! - Control aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tris3d_core as core;
pub use tris3d_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
