//! Legal move filtering.
//!
//! Every pseudo-legal candidate is applied to a scratch copy of the board and
//! kept only if the mover's king is not attacked afterwards. This is the only
//! place that decides legality; `Board::apply_move` and the bots both go
//! through it.

use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_king_attacked;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveFilter;

impl LegalMoveFilter {
    /// Legal moves of the piece on `square`. Pieces of the side not to move
    /// have none.
    pub fn legal_moves(&self, board: &Board, square: Square) -> Vec<ChessMove> {
        let Some(piece) = board.piece_at(square).copied() else {
            return Vec::new();
        };
        if piece.color != board.side_to_move() {
            return Vec::new();
        }

        let mut scratch = board.clone();
        let mut out = Vec::new();
        filter_piece_moves(&mut scratch, &piece, &mut out);
        out
    }

    /// Union of legal moves over the side to move's pieces, in piece order.
    pub fn all_legal_moves(&self, board: &Board) -> Vec<ChessMove> {
        let mut scratch = board.clone();
        self.all_legal_moves_in_place(&mut scratch)
    }

    /// Same as `all_legal_moves` but borrows a board the caller already owns
    /// as scratch space. The board is left exactly as it was passed in.
    pub fn all_legal_moves_in_place(&self, board: &mut Board) -> Vec<ChessMove> {
        let side = board.side_to_move();
        let movers: Vec<Piece> = board
            .pieces()
            .iter()
            .filter(|p| p.color == side)
            .copied()
            .collect();

        let mut out = Vec::with_capacity(48);
        for piece in &movers {
            filter_piece_moves(board, piece, &mut out);
        }
        out
    }

    /// Whether the side to move has at least one legal move.
    pub fn has_legal_move_in_place(&self, board: &mut Board) -> bool {
        let side = board.side_to_move();
        let movers: Vec<Piece> = board
            .pieces()
            .iter()
            .filter(|p| p.color == side)
            .copied()
            .collect();

        let mut out = Vec::new();
        for piece in &movers {
            filter_piece_moves(board, piece, &mut out);
            if !out.is_empty() {
                return true;
            }
        }
        false
    }
}

fn filter_piece_moves(board: &mut Board, piece: &Piece, out: &mut Vec<ChessMove>) {
    for mv in piece.pseudo_legal_moves(board) {
        // Generated moves always have their origin occupied.
        if board.make_move(&mv).is_err() {
            continue;
        }
        let exposes_king = is_king_attacked(board, piece.color);
        board.unmake_move();

        if !exposes_king {
            out.push(mv);
        }
    }
}
