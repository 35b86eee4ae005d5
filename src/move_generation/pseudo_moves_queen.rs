use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::piece::Piece;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut Vec<ChessMove>) {
    generate_bishop_moves(board, queen, out);
    generate_rook_moves(board, queen, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn queen_on_open_board_combines_both_sliders() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("test FEN should parse");
        let queen = board
            .piece_at(algebraic_to_square("d4").expect("square should parse"))
            .expect("queen should be present");
        let mut out = Vec::new();
        generate_queen_moves(&board, queen, &mut out);
        // 13 diagonal + 14 orthogonal targets, neither king is on the queen's lines.
        assert_eq!(out.len(), 27);
    }
}
