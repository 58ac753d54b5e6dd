//! Camera-relative command layer.
//!
//! Sits between input collaborators and [`tris3d_core::GameState`]: horizontal moves are
//! resolved against the camera heading, then every action is routed to the engine.

pub mod camera;
pub mod dispatch;

pub use tris3d_core as core;
pub use tris3d_types as types;

pub use camera::{heading_from_azimuth, heading_from_direction, resolve_move, Camera};
pub use dispatch::{apply_event, try_apply, CommandError};
