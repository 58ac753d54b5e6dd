//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any context
//! (core simulation, command layer, terminal rendering, external renderers via serde).
//!
//! # Grid Dimensions
//!
//! The play volume is a fixed 6 x 6 x 12 box:
//!
//! - **Width** (`x`): 6 cells (indexed 0-5)
//! - **Depth** (`z`): 6 cells (indexed 0-5)
//! - **Height** (`y`): 12 layers (indexed 0-11, 0 is the floor)
//!
//! Pieces spawn with their highest cube in layer 11; any cube left in that layer after a
//! lock ends the game.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 1000 | Interval between gravity steps |
//! | `FRAME_MS` | 16 | Terminal frontend frame interval (~60 FPS) |
//! | `CUBE_SCORE` | 2 | Points per locked cube |
//! | `ROW_SCORE` | 10 | Points per cleared layer |
//!
//! # Half-cell coordinates
//!
//! Piece offsets and piece positions are integer-or-half-integer. They are stored
//! exactly as [`HalfVec3`], which counts half cells. A cube's grid cell is the
//! floor of `position + offset` on every axis.
//!
//! # Examples
//!
//! ```
//! use tris3d_types::{GameAction, HalfVec3, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let action = GameAction::from_str("rotateX").unwrap();
//! assert_eq!(action, GameAction::RotateX);
//!
//! // (2.5, 0.5, -0.5) sits in cell (2, 0, -1)
//! let p = HalfVec3::new(5, 1, -1);
//! assert_eq!(p.cell(), tris3d_types::GridPos::new(2, 0, -1));
//!
//! assert_eq!(GRID_WIDTH, 6);
//! assert_eq!(GRID_HEIGHT, 12);
//! ```

use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

/// Grid width in cells along x (6)
pub const GRID_WIDTH: u8 = 6;

/// Grid depth in cells along z (6)
pub const GRID_DEPTH: u8 = 6;

/// Grid height in layers along y (12)
pub const GRID_HEIGHT: u8 = 12;

/// Index of the topmost layer; occupancy here after a lock is game over
pub const TOP_LAYER: u8 = GRID_HEIGHT - 1;

/// Number of cells in one horizontal layer
pub const LAYER_CELLS: usize = GRID_WIDTH as usize * GRID_DEPTH as usize;

/// Gravity interval (1000ms = one layer per second)
pub const GRAVITY_MS: u32 = 1000;

/// Frame interval of the terminal frontend in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Every catalog piece is a tetracube
pub const CUBES_PER_PIECE: usize = 4;

/// Points awarded for each locked cube
pub const CUBE_SCORE: u32 = 2;

/// Points awarded for each cleared layer
pub const ROW_SCORE: u32 = 10;

/// Copies of each piece kind added to the bag per refill
pub const BAG_COPIES: usize = 3;

/// Elemental rotations composed when orienting a freshly drawn piece
pub const RANDOM_ORIENT_STEPS: usize = 5;


/// The ten piece kinds
///
/// Seven flat tetrominoes plus the three chiral/branching tetracubes that only exist
/// in three dimensions:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **Branch**: Pink, three arms from one corner cube
/// - **ScrewLeft** / **ScrewRight**: Teal / Olive, twisted mirror pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Branch,
    ScrewLeft,
    ScrewRight,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 10] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Branch,
        PieceKind::ScrewLeft,
        PieceKind::ScrewRight,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tris3d_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Branch"), Some(PieceKind::Branch));
    /// assert_eq!(PieceKind::from_str("screw_left"), Some(PieceKind::ScrewLeft));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "branch" => Some(PieceKind::Branch),
            "screw_left" | "screwleft" => Some(PieceKind::ScrewLeft),
            "screw_right" | "screwright" => Some(PieceKind::ScrewRight),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Branch => "branch",
            PieceKind::ScrewLeft => "screw_left",
            PieceKind::ScrewRight => "screw_right",
        }
    }
}

/// Principal rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// 24-bit RGB display color of a placed cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell of the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: A locked cube of that color
pub type Cell = Option<Color>;

/// Integer grid coordinate of a single cell.
///
/// May lie outside the grid; bounds are checked by the grid store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl GridPos {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }
}

/// A point or offset measured in half cells.
///
/// `HalfVec3::new(3, 0, -1)` is the point `(1.5, 0.0, -0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HalfVec3 {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl HalfVec3 {
    pub const ZERO: HalfVec3 = HalfVec3::new(0, 0, 0);

    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Whole-cell displacement.
    pub const fn cells(dx: i8, dy: i8, dz: i8) -> Self {
        Self::new(dx * 2, dy * 2, dz * 2)
    }

    /// The grid cell containing this point (floor on each axis).
    pub const fn cell(self) -> GridPos {
        GridPos::new(
            self.x.div_euclid(2),
            self.y.div_euclid(2),
            self.z.div_euclid(2),
        )
    }

    /// Convert to floating point cell units (for renderers).
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.x) / 2.0,
            f32::from(self.y) / 2.0,
            f32::from(self.z) / 2.0,
        ]
    }
}

impl Add for HalfVec3 {
    type Output = HalfVec3;

    fn add(self, rhs: HalfVec3) -> HalfVec3 {
        HalfVec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for HalfVec3 {
    type Output = HalfVec3;

    fn neg(self) -> HalfVec3 {
        HalfVec3::new(-self.x, -self.y, -self.z)
    }
}

/// Lifecycle phase of a game
///
/// NotStarted → Running ⇄ Paused; Running → GameOver; any → NotStarted via reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not_started",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Horizontal camera heading, quantized to the four directions the camera can
/// face when looking into the play volume.
///
/// Forward/back/left/right input is resolved against the heading so that "forward"
/// always moves the piece away from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraHeading {
    /// Looking toward -z (the initial camera)
    #[default]
    NegZ,
    PosX,
    PosZ,
    NegX,
}

impl CameraHeading {
    /// Clockwise order seen from above.
    pub const ALL: [CameraHeading; 4] = [
        CameraHeading::NegZ,
        CameraHeading::PosX,
        CameraHeading::PosZ,
        CameraHeading::NegX,
    ];

    /// Unit step (dx, dz) pointing away from the viewer
    pub fn forward(&self) -> (i8, i8) {
        match self {
            CameraHeading::NegZ => (0, -1),
            CameraHeading::PosX => (1, 0),
            CameraHeading::PosZ => (0, 1),
            CameraHeading::NegX => (-1, 0),
        }
    }

    /// Unit step (dx, dz) toward the viewer's right hand
    pub fn right(&self) -> (i8, i8) {
        let (fx, fz) = self.forward();
        (-fz, fx)
    }

    /// Planar step (dx, dz) for a move action seen from this heading
    ///
    /// Returns `None` for actions that are not horizontal moves.
    pub fn resolve(&self, action: GameAction) -> Option<(i8, i8)> {
        let (fx, fz) = self.forward();
        let (rx, rz) = self.right();
        match action {
            GameAction::MoveForward => Some((fx, fz)),
            GameAction::MoveBack => Some((-fx, -fz)),
            GameAction::MoveRight => Some((rx, rz)),
            GameAction::MoveLeft => Some((-rx, -rz)),
            _ => None,
        }
    }

    /// Orbit the camera a quarter turn clockwise
    pub fn turn_right(&self) -> Self {
        match self {
            CameraHeading::NegZ => CameraHeading::PosX,
            CameraHeading::PosX => CameraHeading::PosZ,
            CameraHeading::PosZ => CameraHeading::NegX,
            CameraHeading::NegX => CameraHeading::NegZ,
        }
    }

    /// Orbit the camera a quarter turn counter-clockwise
    pub fn turn_left(&self) -> Self {
        match self {
            CameraHeading::NegZ => CameraHeading::NegX,
            CameraHeading::NegX => CameraHeading::PosZ,
            CameraHeading::PosZ => CameraHeading::PosX,
            CameraHeading::PosX => CameraHeading::NegZ,
        }
    }

    pub fn turned(&self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraHeading::NegZ => "-z",
            CameraHeading::PosX => "+x",
            CameraHeading::PosZ => "+z",
            CameraHeading::NegX => "-x",
        }
    }
}

/// Quarter-turn camera orbit direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// Semantic input events accepted by the game
///
/// These are produced by any input collaborator (keyboard, scripted tests, bots).
/// No raw device codes cross this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Begin a new game from NotStarted
    Start,
    /// Move one cell away from the viewer
    MoveForward,
    /// Move one cell toward the viewer
    MoveBack,
    /// Move one cell to the viewer's left
    MoveLeft,
    /// Move one cell to the viewer's right
    MoveRight,
    /// Rotate 90° about the x axis
    RotateX,
    /// Rotate 90° about the y axis
    RotateY,
    /// Rotate 90° about the z axis
    RotateZ,
    /// Drop straight down and lock immediately
    HardDrop,
    /// Toggle between Running and Paused
    Pause,
    /// Clear everything and return to NotStarted
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tris3d_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateZ"), Some(GameAction::RotateZ));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveforward" => Some(GameAction::MoveForward),
            "moveback" => Some(GameAction::MoveBack),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatex" => Some(GameAction::RotateX),
            "rotatey" => Some(GameAction::RotateY),
            "rotatez" => Some(GameAction::RotateZ),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBack => "moveBack",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateX => "rotateX",
            GameAction::RotateY => "rotateY",
            GameAction::RotateZ => "rotateZ",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }

    /// Rotation axis for the rotate actions
    pub fn axis(&self) -> Option<Axis> {
        match self {
            GameAction::RotateX => Some(Axis::X),
            GameAction::RotateY => Some(Axis::Y),
            GameAction::RotateZ => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cubes newly added to the grid; below 4 when the piece locked over occupied cells
    pub cubes: u32,
    pub rows_cleared: u32,
    pub points: u32,
    pub game_over: bool,
}
