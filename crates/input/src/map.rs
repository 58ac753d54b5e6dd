//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Turn};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    /// Orbit the camera a quarter turn
    TurnCamera(Turn),
}

/// Map keyboard input to input events.
///
/// Moves are camera-relative: up/W pushes the piece away from the viewer.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let action = match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => GameAction::MoveForward,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => GameAction::MoveBack,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => GameAction::MoveRight,

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => GameAction::RotateX,
        KeyCode::Char('e') | KeyCode::Char('E') => GameAction::RotateY,
        KeyCode::Char('r') | KeyCode::Char('R') => GameAction::RotateZ,

        // Actions
        KeyCode::Char(' ') => GameAction::HardDrop,
        KeyCode::Enter => GameAction::Start,
        KeyCode::Char('p') | KeyCode::Char('P') => GameAction::Pause,
        KeyCode::Backspace | KeyCode::Char('n') | KeyCode::Char('N') => GameAction::Reset,

        // Camera
        KeyCode::Char('[') => return Some(InputEvent::TurnCamera(Turn::Left)),
        KeyCode::Char(']') => return Some(InputEvent::TurnCamera(Turn::Right)),

        _ => return None,
    };
    Some(InputEvent::Action(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
