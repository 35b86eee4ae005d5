//! Move value type produced by generation and consumed by `Board::apply_move`.

use std::fmt;

use crate::game_state::chess_types::{MoveKind, PieceKind, Square};
use crate::game_state::piece::Piece;

/// An immutable description of one ply.
///
/// `piece` is a snapshot of the mover before the move. `captured` is the
/// victim as it stood (for en passant it is not on `to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

impl ChessMove {
    pub fn new(piece: Piece, to: Square, captured: Option<Piece>) -> Self {
        Self {
            from: piece.square,
            to,
            piece,
            captured,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    pub fn promotion(piece: Piece, to: Square, captured: Option<Piece>, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            kind: MoveKind::Promotion,
            ..Self::new(piece, to, captured)
        }
    }

    pub fn en_passant(piece: Piece, to: Square, victim: Piece) -> Self {
        Self {
            kind: MoveKind::EnPassant,
            ..Self::new(piece, to, Some(victim))
        }
    }

    pub fn castle(king: Piece, to: Square) -> Self {
        Self {
            kind: MoveKind::Castle,
            ..Self::new(king, to, None)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// A pawn advancing two rows from its starting rank.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Same origin, destination and promotion choice. Used to match caller
    /// supplied moves against the generated legal set.
    #[inline]
    pub fn same_path(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Display for ChessMove {
    /// Long algebraic form, e.g. `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}
