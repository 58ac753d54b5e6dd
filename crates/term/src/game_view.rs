//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! The volume is drawn as three orthographic projections, all relative to the camera
//! heading so that what the player sees matches how moves resolve:
//!
//! - **VIEW**: looking along the heading; columns run to the viewer's right, rows are layers
//! - **SIDE**: looking in from the viewer's right; columns run away from the viewer
//! - **TOP**: height map seen from above, forward is up
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CameraHeading, Color, GamePhase, GRID_HEIGHT, GRID_WIDTH};

/// Cells per side of the (square) footprint
const SIDE: i8 = GRID_WIDTH as i8;
const HEIGHT: i8 = GRID_HEIGHT as i8;
const GAP: u16 = 2;
const PANEL_W: u16 = 14;

const BG: Rgb = Rgb::new(24, 24, 32);
const EMPTY: CellStyle = CellStyle {
    fg: Rgb::new(80, 80, 96),
    bg: BG,
    bold: false,
    dim: true,
};
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Top-left corners of each framed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub front: (u16, u16),
    pub side: (u16, u16),
    pub top: (u16, u16),
    pub panel: (u16, u16),
}

/// A lightweight terminal renderer for the 3D game.
pub struct GameView {
    /// Volume cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a terminal glyph.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

enum Hit {
    Active(Color),
    Locked(Color),
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame_w(&self) -> u16 {
        SIDE as u16 * self.cell_w + 2
    }

    /// Where each panel lands for `viewport`
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let fw = self.frame_w();
        let total_w = fw * 3 + GAP * 3 + PANEL_W;
        // label row + framed volume
        let total_h = 1 + HEIGHT as u16 + 2;

        let x0 = viewport.width.saturating_sub(total_w) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h + 2) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = y0 + 1;
        Layout {
            front: (x0, frame_y),
            side: (x0 + fw + GAP, frame_y),
            top: (x0 + (fw + GAP) * 2, frame_y),
            panel: (x0 + (fw + GAP) * 3, frame_y),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free; reuse the framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        heading: CameraHeading,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let fw = self.frame_w();
        let tall = HEIGHT as u16 + 2;
        let short = SIDE as u16 + 2;

        fb.put_str(layout.front.0, layout.front.1 - 1, "VIEW", LABEL);
        fb.put_str(layout.side.0, layout.side.1 - 1, "SIDE", LABEL);
        fb.put_str(layout.top.0, layout.top.1 - 1, "TOP", LABEL);
        fb.draw_box(layout.front.0, layout.front.1, fw, tall, BORDER);
        fb.draw_box(layout.side.0, layout.side.1, fw, tall, BORDER);
        fb.draw_box(layout.top.0, layout.top.1, fw, short, BORDER);

        for col in 0..SIDE {
            for y in 0..HEIGHT {
                // Front: nearest first along the heading.
                let front = (0..SIDE).map(|d| world_xz(heading, col, d));
                self.draw_ray(fb, snap, layout.front, col, y, front);

                // Side: seen from the right, so the largest `u` is nearest.
                let side = (0..SIDE).rev().map(|u| world_xz(heading, u, col));
                self.draw_ray(fb, snap, layout.side, col, y, side);
            }
            for d in 0..SIDE {
                self.draw_column(fb, snap, layout.top, col, d, heading);
            }
        }

        self.draw_side_panel(fb, snap, heading, layout.panel, viewport);

        let overlay = match snap.phase {
            GamePhase::NotStarted => Some("PRESS ENTER"),
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::Running => None,
        };
        if let Some(text) = overlay {
            let w = text.chars().count() as u16;
            let x = layout.front.0 + fw.saturating_sub(w) / 2;
            let y = layout.front.1 + tall / 2;
            fb.put_str(x, y, text, LABEL);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        heading: CameraHeading,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, heading, viewport, &mut fb);
        fb
    }

    /// Draw the first cube met along a ray of (x, z) columns at layer `y`.
    fn draw_ray(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin: (u16, u16),
        col: i8,
        y: i8,
        ray: impl Iterator<Item = (i8, i8)>,
    ) {
        let mut ghost = None;
        for (depth, (x, z)) in ray.enumerate() {
            if let Some(hit) = cube_at(snap, x, y, z) {
                let (ch, style) = match hit {
                    Hit::Active(c) => (
                        '█',
                        CellStyle {
                            bold: true,
                            ..CellStyle::fg(c.into(), BG)
                        },
                    ),
                    Hit::Locked(c) => (
                        '█',
                        CellStyle::fg(Rgb::from(c).scaled(depth_shade(depth)), BG),
                    ),
                };
                self.fill_volume_cell(fb, origin, col, HEIGHT - 1 - y, ch, style);
                return;
            }
            if ghost.is_none() {
                ghost = snap
                    .ghost
                    .filter(|g| g.covers(x, y, z))
                    .map(|g| g.color);
            }
        }

        match ghost {
            Some(c) => {
                let style = CellStyle {
                    dim: true,
                    ..CellStyle::fg(c.into(), BG)
                };
                self.fill_volume_cell(fb, origin, col, HEIGHT - 1 - y, '░', style);
            }
            None => self.fill_volume_cell(fb, origin, col, HEIGHT - 1 - y, '·', EMPTY),
        }
    }

    /// Height map cell for the column under (col, d).
    fn draw_column(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        origin: (u16, u16),
        col: i8,
        d: i8,
        heading: CameraHeading,
    ) {
        let (x, z) = world_xz(heading, col, d);
        let row = SIDE - 1 - d;

        if let Some(active) = snap.active.filter(|a| covers_column(a, x, z)) {
            let style = CellStyle {
                bold: true,
                ..CellStyle::fg(active.color.into(), BG)
            };
            self.fill_volume_cell(fb, origin, col, row, '█', style);
            return;
        }

        match column_top(snap, x, z) {
            Some((height, color)) => {
                let style = CellStyle::fg(Rgb::from(color), BG);
                self.fill_volume_cell(fb, origin, col, row, height_char(height), style);
            }
            None => self.fill_volume_cell(fb, origin, col, row, '·', EMPTY),
        }
    }

    fn fill_volume_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        col: i8,
        row: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + 1 + col as u16 * self.cell_w;
        let py = origin.1 + 1 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        heading: CameraHeading,
        (x, mut y): (u16, u16),
        viewport: Viewport,
    ) {
        if x >= viewport.width || viewport.width - x < 8 {
            return;
        }

        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x, y + 1, snap.score, VALUE);
        y += 3;

        fb.put_str(x, y, "LINES", LABEL);
        fb.put_u32(x, y + 1, snap.lines, VALUE);
        y += 3;

        fb.put_str(x, y, "FACING", LABEL);
        fb.put_str(x, y + 1, heading.as_str(), VALUE);
        y += 3;

        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;
        match snap.next {
            Some(next) => {
                fb.put_str(x, y, next.kind.as_str(), VALUE);
                draw_preview(fb, &next, x, y + 1);
            }
            None => fb.put_str(x, y, "-", VALUE),
        }
    }
}

/// World (x, z) for screen column `u` at depth `d` (0 = nearest the viewer).
fn world_xz(heading: CameraHeading, u: i8, d: i8) -> (i8, i8) {
    let last = SIDE - 1;
    let (fx, fz) = heading.forward();
    let (rx, rz) = heading.right();
    let axis = |r: i8, f: i8| match (r, f) {
        (1, _) => u,
        (-1, _) => last - u,
        (_, 1) => d,
        _ => last - d,
    };
    (axis(rx, fx), axis(rz, fz))
}

fn cube_at(snap: &GameSnapshot, x: i8, y: i8, z: i8) -> Option<Hit> {
    if let Some(active) = snap.active.filter(|a| a.covers(x, y, z)) {
        return Some(Hit::Active(active.color));
    }
    snap.cell(x, y, z).flatten().map(Hit::Locked)
}

fn depth_shade(depth: usize) -> f32 {
    1.0 - 0.1 * depth as f32
}

fn covers_column(piece: &PieceSnapshot, x: i8, z: i8) -> bool {
    piece.cells.iter().any(|c| c.x == x && c.z == z)
}

/// Height (1-based) and color of the highest locked cube in a column
fn column_top(snap: &GameSnapshot, x: i8, z: i8) -> Option<(u8, Color)> {
    (0..HEIGHT)
        .rev()
        .find_map(|y| snap.cell(x, y, z).flatten().map(|c| (y as u8 + 1, c)))
}

fn height_char(height: u8) -> char {
    match height {
        0 => '·',
        1..=9 => (b'0' + height) as char,
        _ => (b'A' + (height - 10)) as char,
    }
}

/// Flattened front view of a piece, 4 rows tall.
fn draw_preview(fb: &mut FrameBuffer, piece: &PieceSnapshot, x: u16, y: u16) {
    let min_x = piece.cells.iter().map(|c| c.x).min().unwrap_or(0);
    let max_y = piece.cells.iter().map(|c| c.y).max().unwrap_or(0);
    let style = CellStyle::fg(piece.color.into(), Rgb::new(0, 0, 0));
    for c in piece.cells {
        let px = x + (c.x - min_x) as u16 * 2;
        let py = y + (max_y - c.y) as u16;
        fb.put_str(px, py, "██", style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use pretty_assertions::assert_eq;

    const VP: Viewport = Viewport {
        width: 80,
        height: 24,
    };
    const RED: Color = Color::new(200, 0, 0);

    fn with_cubes(cubes: &[(usize, usize, usize)]) -> GameSnapshot {
        let mut snap = GameSnapshot {
            phase: GamePhase::Running,
            ..GameSnapshot::default()
        };
        for &(x, y, z) in cubes {
            snap.grid[x][z][y] = Some(RED);
        }
        snap
    }

    fn at(fb: &FrameBuffer, origin: (u16, u16), col: u16, row: u16) -> (char, Rgb) {
        let cell = fb.get(origin.0 + 1 + col * 2, origin.1 + 1 + row).unwrap();
        (cell.ch, cell.style.fg)
    }

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn empty_snapshot_has_labels_and_start_prompt() {
        let fb = GameView::default().render(&GameSnapshot::default(), CameraHeading::NegZ, VP);
        let t = text(&fb);
        for label in ["VIEW", "SIDE", "TOP", "SCORE", "LINES", "NEXT", "PRESS ENTER"] {
            assert!(t.contains(label), "missing {label}");
        }
    }

    #[test]
    fn front_view_draws_nearest_cube() {
        let view = GameView::default();
        let layout = view.layout(VP);
        // Default camera looks toward -z, so z = 5 is nearest.
        let snap = with_cubes(&[(0, 0, 5), (3, 2, 0)]);
        let fb = view.render(&snap, CameraHeading::NegZ, VP);

        assert_eq!(at(&fb, layout.front, 0, 11), ('█', Rgb::from(RED)));
        // Farther cubes are shaded darker.
        let (ch, fg) = at(&fb, layout.front, 3, 9);
        assert_eq!(ch, '█');
        assert_eq!(fg, Rgb::from(RED).scaled(depth_shade(5)));
        assert_eq!(at(&fb, layout.front, 1, 11).0, '·');
    }

    #[test]
    fn side_view_looks_in_from_the_right() {
        let view = GameView::default();
        let layout = view.layout(VP);
        let snap = with_cubes(&[(5, 0, 5)]);
        let fb = view.render(&snap, CameraHeading::NegZ, VP);

        // Nearest depth (z = 5) is column 0 of the side view, unshaded since x = 5
        // is the first slice seen from the right.
        assert_eq!(at(&fb, layout.side, 0, 11), ('█', Rgb::from(RED)));
    }

    #[test]
    fn top_view_shows_column_height() {
        let view = GameView::default();
        let layout = view.layout(VP);
        let snap = with_cubes(&[(2, 0, 5), (2, 1, 5), (2, 2, 5)]);
        let fb = view.render(&snap, CameraHeading::NegZ, VP);

        // z = 5 is nearest, drawn on the bottom row.
        assert_eq!(at(&fb, layout.top, 2, 5).0, '3');
        assert_eq!(at(&fb, layout.top, 2, 0).0, '·');
    }

    #[test]
    fn projections_follow_heading() {
        let view = GameView::default();
        let layout = view.layout(VP);
        let snap = with_cubes(&[(0, 0, 0)]);

        // Facing +x: right is +z, nearest slice is x = 0.
        let fb = view.render(&snap, CameraHeading::PosX, VP);
        assert_eq!(at(&fb, layout.front, 0, 11), ('█', Rgb::from(RED)));

        // Facing -z: the same cube is far at the back-left.
        let fb = view.render(&snap, CameraHeading::NegZ, VP);
        let (ch, fg) = at(&fb, layout.front, 0, 11);
        assert_eq!(ch, '█');
        assert_eq!(fg, Rgb::from(RED).scaled(depth_shade(5)));
    }

    #[test]
    fn height_chars() {
        assert_eq!(height_char(1), '1');
        assert_eq!(height_char(9), '9');
        assert_eq!(height_char(10), 'A');
        assert_eq!(height_char(12), 'C');
    }

    #[test]
    fn live_game_draws_active_piece_and_overlays() {
        let view = GameView::default();
        let layout = view.layout(VP);
        let mut gs = GameState::new(7);
        gs.start();
        let snap = gs.snapshot();
        let fb = view.render(&snap, CameraHeading::NegZ, VP);

        let active = snap.active.unwrap();
        // Every active cube is visible from the front, in the active color.
        for c in active.cells {
            let (ch, fg) = at(&fb, layout.front, c.x as u16, (11 - c.y) as u16);
            assert_eq!(ch, '█');
            assert_eq!(fg, Rgb::from(active.color));
        }
        assert!(!text(&fb).contains("PAUSED"));

        gs.pause();
        let fb = view.render(&gs.snapshot(), CameraHeading::NegZ, VP);
        assert!(text(&fb).contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut gs = GameState::new(1);
        gs.start();
        let fb = GameView::default().render(&gs.snapshot(), CameraHeading::NegX, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
