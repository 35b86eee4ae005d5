//! Pieces and their per-variant pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

/// A single piece owned by a `Board`.
///
/// `has_moved` only matters to kings and rooks, where it gates castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Every geometrically reachable move for this piece, ignoring whether it
    /// exposes the own king.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(16);
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(board, self, &mut out),
            PieceKind::Knight => generate_knight_moves(board, self, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, self, &mut out),
            PieceKind::Rook => generate_rook_moves(board, self, &mut out),
            PieceKind::Queen => generate_queen_moves(board, self, &mut out),
            PieceKind::King => generate_king_moves(board, self, &mut out),
        }
        out
    }

    /// Uppercase for light, lowercase for dark.
    pub fn fen_char(&self) -> char {
        let ch = self.kind.fen_char();
        match self.color {
            Color::Light => ch.to_ascii_uppercase(),
            Color::Dark => ch,
        }
    }
}
