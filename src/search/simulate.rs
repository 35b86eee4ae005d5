//! Piece-list move simulation.
//!
//! The one-ply bots score candidate moves on a cloned piece list so the live
//! board is never touched. A move whose origin is empty in the snapshot is an
//! error rather than a silent no-op.

use crate::chess_errors::SimulationError;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{CastleSide, MoveKind, Square};
use crate::game_state::piece::Piece;

/// Result of simulating one move on a cloned snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPosition {
    pub pieces: Vec<Piece>,
    /// The simulated move with the piece it actually removed attached.
    pub mv: ChessMove,
}

pub fn simulate_move(pieces: &[Piece], mv: &ChessMove) -> Result<SimulatedPosition, SimulationError> {
    let mut clone = pieces.to_vec();
    let mut mover_index = clone
        .iter()
        .position(|p| p.square == mv.from)
        .ok_or(SimulationError::NoPieceAtOrigin(mv.from))?;
    let mover_color = clone[mover_index].color;

    let victim_square = match (mv.kind, mv.captured) {
        (MoveKind::EnPassant, Some(victim)) => victim.square,
        _ => mv.to,
    };

    let mut simulated = *mv;
    simulated.captured = None;
    if let Some(victim_index) = clone
        .iter()
        .position(|p| p.square == victim_square && p.color != mover_color)
    {
        let victim = clone.remove(victim_index);
        if victim_index < mover_index {
            mover_index -= 1;
        }
        simulated.captured = Some(victim);
    }

    let mover = &mut clone[mover_index];
    mover.square = mv.to;
    mover.has_moved = true;
    if let Some(promo) = mv.promotion {
        mover.kind = promo;
    }

    if mv.kind == MoveKind::Castle {
        if let Some(side) = CastleSide::from_king_target_col(mv.to.col) {
            let home = Square {
                row: mv.from.row,
                col: side.rook_home_col(),
            };
            if let Some(rook) = clone.iter_mut().find(|p| p.square == home) {
                rook.square = Square {
                    row: mv.from.row,
                    col: side.rook_target_col(),
                };
                rook.has_moved = true;
            }
        }
    }

    Ok(SimulatedPosition {
        pieces: clone,
        mv: simulated,
    })
}
