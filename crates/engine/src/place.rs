//! Applying a chosen placement to a live session

use thiserror::Error;
use tracing::debug;

use crate::core::{DropOutcome, GameState, Move};
use crate::types::{Rotation, RotationDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is not playable")]
    NotPlayable,
    #[error("no active piece")]
    NoActive,
    #[error("could not rotate to target rotation")]
    RotationBlocked,
    #[error("could not move to target x due to collision")]
    XBlocked,
}

/// Quarter turns needed in each direction, shorter plan first
fn rotation_plans(current: Rotation, target: Rotation) -> [(RotationDir, u8); 2] {
    let cur = current.index() as i8;
    let tgt = target.index() as i8;
    let cw = (tgt - cur).rem_euclid(4) as u8;
    let ccw = (cur - tgt).rem_euclid(4) as u8;

    if ccw < cw {
        [(RotationDir::Ccw, ccw), (RotationDir::Cw, cw)]
    } else {
        [(RotationDir::Cw, cw), (RotationDir::Ccw, ccw)]
    }
}

/// Rotate the active piece to `mv.rotation`, walk it to `mv.x` and hard drop
///
/// Returns the outcome of the lock. On error the piece is left unlocked; the
/// session is restored to where it was before the call.
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<DropOutcome, PlaceError> {
    if !state.started() || state.paused() || state.game_over() {
        return Err(PlaceError::NotPlayable);
    }
    let Some(active0) = state.active() else {
        return Err(PlaceError::NoActive);
    };

    let before = state.clone();
    let mut rotated = false;
    for (dir, steps) in rotation_plans(active0.rotation, mv.rotation) {
        *state = before.clone();
        if (0..steps).all(|_| state.rotate(dir)) {
            rotated = true;
            break;
        }
    }
    if !rotated {
        *state = before;
        return Err(PlaceError::RotationBlocked);
    }

    let Some(active) = state.active() else {
        return Err(PlaceError::NoActive);
    };

    let dx = mv.x - active.x;
    let step = dx.signum() as i8;
    for _ in 0..dx.abs() {
        if !state.move_horizontal(step) {
            *state = before;
            return Err(PlaceError::XBlocked);
        }
    }

    debug!(rotation = ?mv.rotation, x = mv.x, score = mv.score, "placing");
    Ok(state.hard_drop())
}
