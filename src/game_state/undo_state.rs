use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Piece-list indices are recorded so that unmaking restores the exact piece
/// order, which move enumeration order depends on.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: ChessMove,
    /// Index of the mover after any captured piece was removed.
    pub mover_index: usize,
    pub mover_before: Piece,
    pub captured: Option<(usize, Piece)>,
    pub rook: Option<(usize, Piece)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
