//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, catalog, bag, orientation and
//! the gravity timer. It owns the active and lookahead pieces, validates every move,
//! runs the lock-and-clear sequence, and walks the phase state machine:
//!
//! ```text
//! NotStarted --start--> Running <--pause/resume--> Paused
//!                          |
//!                          +--top layer occupied--> GameOver
//! any phase --reset--> NotStarted
//! ```
//!
//! Rejected moves are not errors: operations return `false` and leave state untouched.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bag::PieceBag;
use crate::catalog::{self, PieceShape};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::orient;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::timer::GravityTimer;
use crate::types::*;

/// A piece in the play volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// World position of the piece origin, in half cells
    pub position: HalfVec3,
    /// Cube offsets in the current orientation, in half cells
    pub offsets: PieceShape,
}

impl Piece {
    /// Draw a piece from the bag with a random orientation and spawn column
    pub fn spawn<R: Rng + ?Sized>(bag: &mut PieceBag, rng: &mut R) -> Self {
        let kind = bag.draw(rng);
        let offsets = orient::random_orient(&catalog::shape(kind), rng);
        let position = orient::spawn_position(&offsets, rng);
        Self {
            kind,
            position,
            offsets,
        }
    }

    /// Grid cells covered by the cubes (floor of position + offset)
    pub fn cells(&self) -> [GridPos; CUBES_PER_PIECE] {
        self.offsets.map(|o| (self.position + o).cell())
    }

    pub fn color(&self) -> Color {
        catalog::color(self.kind)
    }

    /// Same piece moved by whole cells
    pub fn translated(&self, dx: i8, dy: i8, dz: i8) -> Self {
        Self {
            position: self.position + HalfVec3::cells(dx, dy, dz),
            ..*self
        }
    }

    /// Same piece turned 90° about `axis` around its own origin
    pub fn rotated(&self, axis: Axis) -> Self {
        Self {
            offsets: orient::rotate(&self.offsets, axis),
            ..*self
        }
    }

    /// Every cube inside the grid and on an empty cell
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.cells().iter().all(|&p| grid.is_free(p))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    next: Option<Piece>,
    bag: PieceBag,
    rng: StdRng,
    timer: GravityTimer,
    phase: GamePhase,
    score: u32,
    lines: u32,
    /// Pieces locked since the last reset
    pieces_locked: u32,
    /// Last lock event (consumed by observers)
    last_lock: Option<LockEvent>,
    config: GameConfig,
}

impl GameState {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            next: None,
            bag: PieceBag::new(),
            rng: StdRng::seed_from_u64(config.seed),
            timer: GravityTimer::new(config.gravity_ms),
            phase: GamePhase::NotStarted,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            last_lock: None,
            config,
        }
    }

    /// Start the game: draw the active and lookahead pieces and arm gravity
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }

        let active = Piece::spawn(&mut self.bag, &mut self.rng);
        let next = Piece::spawn(&mut self.bag, &mut self.rng);
        self.active = Some(active);
        self.next = Some(next);
        self.phase = GamePhase::Running;
        self.timer.schedule();

        log::info!(
            "game started (seed {}, gravity {}ms)",
            self.config.seed,
            self.timer.interval_ms()
        );
        log::debug!("spawned {:?} at {:?}", active.kind, active.position);
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Layers cleared since the last reset
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Gravity step: move the active piece down one layer, or lock it if it can't
    ///
    /// No-op (returns false) unless Running with an active piece.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.translated(0, -1, 0);
        if candidate.is_valid(&self.grid) {
            self.active = Some(candidate);
            self.timer.schedule();
        } else {
            self.lock_active();
        }
        true
    }

    /// Let `elapsed_ms` of wall time pass, running a gravity step each time the
    /// timer comes due. Returns the number of steps run.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.phase != GamePhase::Running {
            return 0;
        }

        let mut budget = elapsed_ms;
        let mut fired = 0;
        while let Some(leftover) = self.timer.advance(budget) {
            log::trace!("gravity fired");
            fired += 1;
            self.tick();
            if self.phase != GamePhase::Running {
                break;
            }
            budget = leftover;
        }
        fired
    }

    /// Try to move the active piece horizontally by whole cells
    pub fn move_by(&mut self, dx: i8, dz: i8) -> bool {
        self.try_replace(|piece| piece.translated(dx, 0, dz))
    }

    /// Try to rotate the active piece 90° about `axis`
    pub fn rotate_active(&mut self, axis: Axis) -> bool {
        self.try_replace(|piece| piece.rotated(axis))
    }

    /// Commit a transformed active piece if it is valid
    fn try_replace(&mut self, transform: impl FnOnce(&Piece) -> Piece) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = transform(&active);
        if !candidate.is_valid(&self.grid) {
            return false;
        }

        self.active = Some(candidate);
        self.timer.schedule();
        true
    }

    /// Drop the active piece as far as it goes and lock it immediately
    ///
    /// Scores exactly like a natural lock; there is no drop bonus.
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        loop {
            let candidate = piece.translated(0, -1, 0);
            if !candidate.is_valid(&self.grid) {
                break;
            }
            piece = candidate;
        }

        self.active = Some(piece);
        self.lock_active();
        true
    }

    /// Where the active piece would land if hard dropped now
    pub fn ghost(&self) -> Option<Piece> {
        let mut piece = self.active?;
        loop {
            let candidate = piece.translated(0, -1, 0);
            if !candidate.is_valid(&self.grid) {
                return Some(piece);
            }
            piece = candidate;
        }
    }

    /// Lock the active piece into the grid, clear full layers, then either end the game
    /// or promote the lookahead piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let cells = piece.cells();
        let filled = self.grid.place(&cells, piece.color());
        if filled < cells.len() {
            // Spawns are not checked against the stack, so a piece can lock on top of cubes.
            log::warn!(
                "{:?} locked over {} occupied cells at {:?}",
                piece.kind,
                cells.len() - filled,
                piece.position
            );
        }
        let cube_points = CUBE_SCORE * cells.len() as u32;

        let cleared = self.grid.clear_full_rows();
        let rows = cleared.len() as u32;
        let row_points = ROW_SCORE * rows;

        self.score += cube_points + row_points;
        self.lines += rows;
        self.pieces_locked += 1;

        let game_over = self.grid.is_top_occupied();
        self.last_lock = Some(LockEvent {
            kind: piece.kind,
            cubes: filled as u32,
            rows_cleared: rows,
            points: cube_points + row_points,
            game_over,
        });

        log::debug!(
            "locked {:?} at {:?}; cleared {:?}; score {}",
            piece.kind,
            piece.position,
            cleared.as_slice(),
            self.score
        );

        if game_over {
            self.phase = GamePhase::GameOver;
            self.timer.cancel();
            log::info!(
                "game over: score {}, {} layers, {} pieces",
                self.score,
                self.lines,
                self.pieces_locked
            );
            return;
        }

        self.spawn_next();
    }

    /// Promote the lookahead piece to active and draw a new lookahead
    fn spawn_next(&mut self) {
        let active = match self.next.take() {
            Some(piece) => piece,
            None => Piece::spawn(&mut self.bag, &mut self.rng),
        };
        self.active = Some(active);
        self.next = Some(Piece::spawn(&mut self.bag, &mut self.rng));
        self.timer.schedule();

        log::debug!("spawned {:?} at {:?}", active.kind, active.position);
    }

    /// Suspend gravity and input
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        self.timer.cancel();
        log::debug!("paused");
        true
    }

    /// Resume from pause, re-arming gravity once
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Running;
        self.timer.schedule();
        log::debug!("resumed");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Clear the grid, score and pieces and return to NotStarted
    ///
    /// The bag and random generator carry on, so the next game deals new pieces.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.last_lock = None;
        self.phase = GamePhase::NotStarted;
        self.timer.cancel();
        log::info!("game reset");
    }

    /// Apply a game action, resolving horizontal moves from the default camera
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        self.apply_action_from(action, CameraHeading::default())
    }

    /// Apply a game action, resolving horizontal moves from `heading`
    pub fn apply_action_from(&mut self, action: GameAction, heading: CameraHeading) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveForward
            | GameAction::MoveBack
            | GameAction::MoveLeft
            | GameAction::MoveRight => match heading.resolve(action) {
                Some((dx, dz)) => self.move_by(dx, dz),
                None => false,
            },
            GameAction::RotateX => self.rotate_active(Axis::X),
            GameAction::RotateY => self.rotate_active(Axis::Y),
            GameAction::RotateZ => self.rotate_active(Axis::Z),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.cells();
        out.active = self.active.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.ghost = self.ghost().map(PieceSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    /// Owned read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
