//! 3D Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tris3d::{core,engine,input,term,types}`; the
//! implementation lives under `crates/`.

pub mod clock;
pub mod logging;

pub use tris3d_core as core;
pub use tris3d_engine as engine;
pub use tris3d_input as input;
pub use tris3d_term as term;
pub use tris3d_types as types;
