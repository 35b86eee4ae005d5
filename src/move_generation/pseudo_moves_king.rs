use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};

pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut Vec<ChessMove>) {
    push_step_moves(board, king, &KING_OFFSETS, out);
    generate_castling_moves(board, king, out);
}

fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<ChessMove>) {
    let row = king.color.back_rank();
    if king.has_moved || king.square != (Square { row, col: 4 }) {
        return;
    }
    let enemy = king.color.opposite();

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if board.castling_rights() & side.right(king.color) == 0 {
            continue;
        }

        let rook_home = Square {
            row,
            col: side.rook_home_col(),
        };
        match board.piece_at(rook_home) {
            Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => {}
            _ => continue,
        }

        let (low, high) = if side.rook_home_col() < 4 {
            (side.rook_home_col() + 1, 3)
        } else {
            (5, side.rook_home_col() - 1)
        };
        if (low..=high).any(|col| board.piece_at(Square { row, col }).is_some()) {
            continue;
        }

        // King's transit: start, crossing square, landing square.
        let target_col = side.king_target_col();
        let (from_col, to_col) = (4.min(target_col), 4.max(target_col));
        if (from_col..=to_col).any(|col| is_square_attacked(board, Square { row, col }, enemy)) {
            continue;
        }

        out.push(ChessMove::castle(*king, Square { row, col: target_col }));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn castles(fen: &str) -> Vec<String> {
        let board = Board::from_fen(fen).expect("test FEN should parse");
        let king = board
            .piece_at(algebraic_to_square("e1").expect("square should parse"))
            .expect("king should be present");
        let mut out = Vec::new();
        generate_king_moves(&board, king, &mut out);
        out.iter()
            .filter(|m| m.kind == MoveKind::Castle)
            .map(|m| m.to.to_string())
            .collect()
    }

    #[test]
    fn both_castles_available_on_clear_unattacked_rank() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["g1", "c1"]);
    }

    #[test]
    fn castling_requires_rights() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1"), vec!["c1"]);
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
    }

    #[test]
    fn castling_requires_empty_squares_between() {
        // b1 occupied blocks only the queen side even though the king never crosses it.
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1"), vec!["g1"]);
    }

    #[test]
    fn castling_forbidden_out_of_through_or_into_check() {
        // Rook on e8 checks the king.
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        // Rook on f8 attacks the crossing square f1.
        assert_eq!(castles("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["c1"]);
        // Rook on c8 attacks the landing square c1.
        assert_eq!(castles("2r3k1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["g1"]);
        // Rook on b8 attacks only b1, which the king never visits.
        assert_eq!(castles("1r4k1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["g1", "c1"]);
    }
}
