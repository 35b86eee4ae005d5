//! Pluggable position evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static scoring to `PositionEvaluation`,
//! so alternate heuristics can be swapped without altering search code.
//! Evaluators only see a piece snapshot and are stateless, so one instance
//! can score any number of cloned snapshots.

use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

/// Score magnitude for a delivered checkmate, far above any material sum.
pub const MATE_SCORE: i32 = 1_000_000;

pub trait PositionEvaluation: Send + Sync {
    /// Score of `pieces` from the perspective of `side`; higher is better.
    fn evaluate(&self, pieces: &[Piece], side: Color) -> i32;
}

/// Signed material sum in centipawns (1/3/3/5/9 pawn units), king excluded.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluation;

impl MaterialEvaluation {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }
}

impl PositionEvaluation for MaterialEvaluation {
    fn evaluate(&self, pieces: &[Piece], side: Color) -> i32 {
        pieces
            .iter()
            .map(|p| signed(p, side, Self::piece_value(p.kind)))
            .sum()
    }
}

/// Material plus a weighted centralization bonus.
///
/// Each non-king piece earns `centralization_weight` points per step it
/// stands closer to the centre than the board edge (0 on the rim, 3 on the
/// four central squares).
#[derive(Debug, Clone, Copy)]
pub struct WeightedEvaluation {
    pub centralization_weight: i32,
}

impl WeightedEvaluation {
    pub const fn new(centralization_weight: i32) -> Self {
        Self {
            centralization_weight,
        }
    }

    #[inline]
    fn centrality(square: Square) -> i32 {
        let row = square.row.min(7 - square.row) as i32;
        let col = square.col.min(7 - square.col) as i32;
        row.min(col)
    }
}

impl Default for WeightedEvaluation {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PositionEvaluation for WeightedEvaluation {
    fn evaluate(&self, pieces: &[Piece], side: Color) -> i32 {
        pieces
            .iter()
            .map(|p| {
                let positional = if p.kind == PieceKind::King {
                    0
                } else {
                    self.centralization_weight * Self::centrality(p.square)
                };
                signed(p, side, MaterialEvaluation::piece_value(p.kind) + positional)
            })
            .sum()
    }
}

#[inline]
fn signed(piece: &Piece, side: Color, value: i32) -> i32 {
    if piece.color == side {
        value
    } else {
        -value
    }
}
