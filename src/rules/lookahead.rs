//! One-ply tactical lookahead shared by the hint and the scripted opponents.
//!
//! Every probe is make, test, undo. Callers get the engine back exactly as
//! they lent it.

use crate::core::PlayerId;
use crate::error::EngineError;

use super::engine::RulesEngine;

/// First move (in ascending order) with which `player` wins on the spot.
///
/// `player` need not be the side to move.
pub fn immediate_win<E: RulesEngine>(
    engine: &mut E,
    player: PlayerId,
) -> Result<Option<E::Move>, EngineError> {
    for mv in engine.valid_moves(player) {
        engine.simulate_move(player, mv)?;
        let won = engine.has_won(player);
        engine.undo_last_move()?;
        if won {
            return Ok(Some(mv));
        }
    }
    Ok(None)
}

/// A winning move for `attacker`, otherwise a move that takes away
/// `defender`'s immediate win.
///
/// The win check always runs first: if `attacker` can win now, a block is
/// never suggested.
pub fn win_or_block<E: RulesEngine>(
    engine: &mut E,
    attacker: PlayerId,
    defender: PlayerId,
) -> Result<Option<E::Move>, EngineError> {
    if let Some(mv) = immediate_win(engine, attacker)? {
        return Ok(Some(mv));
    }
    immediate_win(engine, defender)
}
