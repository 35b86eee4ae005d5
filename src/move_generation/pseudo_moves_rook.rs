use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{push_ray_moves, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<ChessMove>) {
    push_ray_moves(board, rook, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn rook_ray_stops_on_first_blocker() {
        // Rook d4: own pawn d6 blocks north, enemy knight f4 is capturable.
        let board = Board::from_fen("4k3/8/3P4/8/3R1n2/8/8/4K3 w - - 0 1").expect("test FEN should parse");
        let rook = board
            .piece_at(algebraic_to_square("d4").expect("square should parse"))
            .expect("rook should be present");
        let mut out = Vec::new();
        generate_rook_moves(&board, rook, &mut out);

        let targets: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        assert!(targets.contains(&"d5".to_owned()));
        assert!(!targets.contains(&"d6".to_owned()));
        assert!(targets.contains(&"f4".to_owned()));
        assert!(!targets.contains(&"g4".to_owned()));
        // d5, e4 f4, d3 d2 d1, c4 b4 a4
        assert_eq!(out.len(), 9);
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
