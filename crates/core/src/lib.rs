//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic for
//! 3D Tetris. It has **no dependencies** on rendering, terminals, or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Time is fed in explicitly, so no test ever sleeps
//! - **Portable**: Any frontend can drive it (terminal, browser bridge, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: Piece shapes (tetracubes) and colors
//! - [`bag`]: Replenishing shuffled bag with three copies of every kind
//! - [`orient`]: Exact quarter-turn rotations, random start orientation, spawn placement
//! - [`grid`]: 6x6x12 occupancy grid with layer clearing
//! - [`timer`]: The single cancellable gravity timer
//! - [`game_state`]: Complete game state and phase state machine
//! - [`snapshot`]: Owned, serializable views for renderers
//! - [`config`]: Seed and gravity settings
//!
//! # Game Rules
//!
//! - Pieces spawn with a random orientation, at a random column where they fit, with
//!   their highest cube in the top layer
//! - Gravity moves the active piece down one layer per interval (1000ms by default)
//! - A piece that cannot move down locks: +2 points per cube
//! - Every completely filled horizontal layer is removed: +10 points per layer
//! - Any cube left in the top layer after a lock ends the game
//!
//! # Example
//!
//! ```
//! use tris3d_core::GameState;
//! use tris3d_types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateY);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() >= 8); // four cubes locked
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! // One second of gravity
//! game.advance(1000);
//! ```

pub mod bag;
pub mod catalog;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod orient;
pub mod snapshot;
pub mod timer;

pub use tris3d_types as types;

// Re-export commonly used types for convenience
pub use bag::PieceBag;
pub use catalog::{color, shape, PieceShape};
pub use config::GameConfig;
pub use game_state::{GameState, Piece};
pub use grid::Grid;
pub use orient::{random_orient, rotate, spawn_position};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use timer::GravityTimer;
