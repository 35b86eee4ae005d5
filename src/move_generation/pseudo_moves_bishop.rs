use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{push_ray_moves, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<ChessMove>) {
    push_ray_moves(board, bishop, &DIAGONAL_DIRECTIONS, out);
}
