//! Game flow tests - full games driven through the public API

use pretty_assertions::assert_eq;

use tris3d::core::{GameConfig, GameState};
use tris3d::engine::apply_event;
use tris3d::types::{CameraHeading, GameAction, GamePhase, CUBE_SCORE, GRAVITY_MS, TOP_LAYER};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    assert!(state.apply_action(GameAction::Start));
    state
}

#[test]
fn test_actions_ignored_before_start() {
    let mut state = GameState::new(1);
    for action in [
        GameAction::MoveLeft,
        GameAction::RotateX,
        GameAction::HardDrop,
        GameAction::Pause,
    ] {
        assert!(!state.apply_action(action), "{action:?}");
    }
    assert_eq!(state.advance(10 * GRAVITY_MS), 0);
    assert_eq!(state.phase(), GamePhase::NotStarted);
}

#[test]
fn test_first_hard_drop_scores_eight() {
    let mut state = started(42);
    let kind = state.active().unwrap().kind;
    let next = state.next().unwrap();

    assert!(state.apply_action(GameAction::HardDrop));
    assert_eq!(state.score(), 4 * CUBE_SCORE);
    assert_eq!(state.grid().occupied_count(), 4);

    let lock = state.take_last_lock().unwrap();
    assert_eq!(lock.kind, kind);
    assert_eq!(lock.points, 8);
    assert!(!lock.game_over);

    // The lookahead was promoted and a fresh lookahead drawn.
    assert_eq!(state.active(), Some(next));
    assert!(state.next().is_some());
}

#[test]
fn test_hard_drop_matches_repeated_gravity() {
    for seed in [1, 2, 3, 10, 99] {
        let mut dropped = started(seed);
        let mut ticked = dropped.clone();

        dropped.hard_drop();
        let mut steps = 0;
        while ticked.pieces_locked() == 0 {
            assert!(ticked.tick());
            steps += 1;
            assert!(steps <= 13);
        }

        assert_eq!(dropped.grid(), ticked.grid(), "seed {seed}");
        assert_eq!(dropped.score(), ticked.score());
        assert_eq!(dropped.active(), ticked.active());
    }
}

#[test]
fn test_gravity_takes_one_interval_per_layer() {
    let mut state = started(5);
    let y0 = state.active().unwrap().position.y;

    assert_eq!(state.advance(GRAVITY_MS - 1), 0);
    assert_eq!(state.active().unwrap().position.y, y0);

    assert_eq!(state.advance(1), 1);
    assert_eq!(state.active().unwrap().position.y, y0 - 2);

    assert_eq!(state.advance(2 * GRAVITY_MS), 2);
    assert_eq!(state.active().unwrap().position.y, y0 - 6);
}

#[test]
fn test_configured_gravity_interval() {
    let mut state = GameState::with_config(GameConfig::default().with_seed(5).with_gravity_ms(100));
    state.start();
    assert_eq!(state.advance(350), 3);
}

#[test]
fn test_stacking_ends_in_game_over() {
    let mut state = started(8);
    let mut drops = 0;
    while state.phase() == GamePhase::Running {
        assert!(state.apply_action(GameAction::HardDrop));
        drops += 1;
        assert!(drops < 1000, "game never ended");
    }

    assert_eq!(state.phase(), GamePhase::GameOver);
    assert!(!state.grid().is_layer_empty(TOP_LAYER));
    assert!(state.active().is_none());
    assert!(!state.timer().is_pending());
    assert!(state.take_last_lock().unwrap().game_over);

    // Nothing but reset does anything now.
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::Pause));
    assert!(!state.apply_action(GameAction::Start));
    assert_eq!(state.advance(5 * GRAVITY_MS), 0);

    assert!(state.apply_action(GameAction::Reset));
    assert_eq!(state.phase(), GamePhase::NotStarted);
    assert_eq!(state.score(), 0);
    assert!(state.apply_action(GameAction::Start));
}

#[test]
fn test_long_run_of_frames_restarts_after_game_over() {
    let mut state = started(12345);
    let mut games = 1;
    let mut late_steps = 0;
    for frame in 0..20_000 {
        if !state.is_running() {
            assert_eq!(state.advance(16), 0);
            state.reset();
            assert!(state.start());
            games += 1;
        }
        let steps = state.advance(16);
        if frame >= 19_000 {
            late_steps += steps;
        }
    }

    assert!(games > 1, "gravity alone never ended a game");
    // 16 seconds of frames at the end still move pieces
    assert!(late_steps >= 10, "only {late_steps} gravity steps late in the run");
}

#[test]
fn test_pause_freezes_gravity_and_resume_rearms_once() {
    let mut state = started(6);
    state.advance(GRAVITY_MS / 2);
    let before = state.active().unwrap();

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.advance(10 * GRAVITY_MS), 0);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active(), Some(before));

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.timer().pending_count(), 1);
    // A full fresh interval, not the half left before pausing.
    assert_eq!(state.advance(GRAVITY_MS / 2), 0);
    assert_eq!(state.advance(GRAVITY_MS / 2), 1);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut state = started(seed);
        for i in 0..20 {
            let action = match i % 4 {
                0 => GameAction::MoveLeft,
                1 => GameAction::RotateY,
                2 => GameAction::MoveForward,
                _ => GameAction::HardDrop,
            };
            state.apply_action(action);
            state.advance(300);
        }
        state.snapshot()
    };
    assert_eq!(play(31), play(31));
}

#[test]
fn test_camera_heading_changes_move_direction() {
    let base = started(12);
    let start = base.active().unwrap().position;

    // Facing -z, right is +x; facing +x, right is +z. Pieces are narrower than the
    // grid, so one of the two directions along each axis is always open.
    for (heading, along_x) in [(CameraHeading::NegZ, true), (CameraHeading::PosX, false)] {
        let mut state = base.clone();
        let sign = if apply_event(&mut state, GameAction::MoveRight, heading) {
            1
        } else {
            assert!(apply_event(&mut state, GameAction::MoveLeft, heading));
            -1
        };
        let after = state.active().unwrap().position;
        if along_x {
            assert_eq!((after.x, after.z), (start.x + 2 * sign, start.z));
        } else {
            assert_eq!((after.x, after.z), (start.x, start.z + 2 * sign));
        }
    }
}
