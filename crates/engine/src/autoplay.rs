//! One-piece-at-a-time automated player

use tracing::{debug, warn};

use crate::core::{find_best_move, DropOutcome, GameState, Weights};
use crate::place::apply_move;

/// Place the active piece where the heuristic likes it best
///
/// Falls back to a hard drop in place when no placement is found or the
/// chosen one cannot be reached. Returns `DropOutcome::Idle` when the session
/// is not playable.
pub fn autoplay_step(state: &mut GameState, weights: &Weights) -> DropOutcome {
    if !state.started() || state.paused() || state.game_over() {
        return DropOutcome::Idle;
    }
    let Some(active) = state.active() else {
        return DropOutcome::Idle;
    };

    let Some(best) = find_best_move(state.grid(), active.kind, weights) else {
        debug!(kind = ?active.kind, "no placement found, dropping in place");
        return state.hard_drop();
    };

    match apply_move(state, &best) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(%err, rotation = ?best.rotation, x = best.x, "placement failed, dropping in place");
            state.hard_drop()
        }
    }
}

/// Let the autoplayer place up to `pieces` pieces
///
/// Stops early when the session stops accepting moves (halted or paused).
/// Returns the number of pieces placed.
pub fn autoplay_pieces(state: &mut GameState, weights: &Weights, pieces: u32) -> u32 {
    let mut placed = 0;
    while placed < pieces {
        if autoplay_step(state, weights) == DropOutcome::Idle {
            break;
        }
        placed += 1;
    }
    debug!(placed, score = state.score(), lines = state.lines(), "autoplay run finished");
    placed
}
