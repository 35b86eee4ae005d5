use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, knight, &KNIGHT_OFFSETS, out);
}
