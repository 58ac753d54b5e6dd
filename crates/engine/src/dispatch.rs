//! Routes semantic actions to the engine.

use crate::core::GameState;
use crate::types::{CameraHeading, GameAction, GamePhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    AlreadyStarted,
    NotRunning,
    NotPausable,
    NoActive,
    Blocked,
}

impl CommandError {
    pub fn code(self) -> &'static str {
        match self {
            CommandError::AlreadyStarted => "already_started",
            CommandError::NotRunning | CommandError::NotPausable => "not_running",
            CommandError::NoActive => "no_active",
            CommandError::Blocked => "blocked",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CommandError::AlreadyStarted => "game has already started",
            CommandError::NotRunning => "game is not running",
            CommandError::NotPausable => "only a running or paused game can toggle pause",
            CommandError::NoActive => "no active piece",
            CommandError::Blocked => "piece is blocked by a wall or locked cube",
        }
    }
}

/// Apply `action` with moves resolved from `heading`, reporting why a rejection happened
pub fn try_apply(
    state: &mut GameState,
    action: GameAction,
    heading: CameraHeading,
) -> Result<(), CommandError> {
    match action {
        GameAction::Start => {
            if state.phase() != GamePhase::NotStarted {
                return Err(CommandError::AlreadyStarted);
            }
        }
        GameAction::Pause => {
            if !matches!(state.phase(), GamePhase::Running | GamePhase::Paused) {
                return Err(CommandError::NotPausable);
            }
        }
        GameAction::Reset => {}
        _ => {
            if state.phase() != GamePhase::Running {
                return Err(CommandError::NotRunning);
            }
            if state.active().is_none() {
                return Err(CommandError::NoActive);
            }
        }
    }

    if state.apply_action_from(action, heading) {
        Ok(())
    } else {
        Err(CommandError::Blocked)
    }
}

/// Apply `action` with moves resolved from `heading`
pub fn apply_event(state: &mut GameState, action: GameAction, heading: CameraHeading) -> bool {
    match try_apply(state, action, heading) {
        Ok(()) => true,
        Err(err) => {
            log::trace!("{} rejected: {}", action.as_str(), err.message());
            false
        }
    }
}
