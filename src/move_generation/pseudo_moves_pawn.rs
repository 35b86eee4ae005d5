use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<ChessMove>) {
    let forward = pawn.color.forward();
    let start_row = (pawn.color.back_rank() as i8 + forward) as u8;
    let promotion_row = pawn.color.opposite().back_rank();

    if let Some(one_step) = pawn.square.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            if one_step.row == promotion_row {
                push_promotions(pawn, one_step, None, out);
            } else {
                out.push(ChessMove::new(*pawn, one_step, None));

                if pawn.square.row == start_row {
                    if let Some(two_step) = one_step.offset(forward, 0) {
                        if board.piece_at(two_step).is_none() {
                            out.push(ChessMove::new(*pawn, two_step, None));
                        }
                    }
                }
            }
        }
    }

    // captures and en-passant
    for col_delta in [-1i8, 1i8] {
        let Some(to) = pawn.square.offset(forward, col_delta) else {
            continue;
        };

        match board.piece_at(to) {
            Some(target) if target.color != pawn.color => {
                if to.row == promotion_row {
                    push_promotions(pawn, to, Some(*target), out);
                } else {
                    out.push(ChessMove::new(*pawn, to, Some(*target)));
                }
            }
            Some(_) => {}
            None if board.en_passant_target() == Some(to) => {
                let victim_square = Square {
                    row: pawn.square.row,
                    col: to.col,
                };
                if let Some(victim) = board.piece_at(victim_square) {
                    if victim.kind == PieceKind::Pawn && victim.color != pawn.color {
                        out.push(ChessMove::en_passant(*pawn, to, *victim));
                    }
                }
            }
            None => {}
        }
    }
}

fn push_promotions(pawn: &Piece, to: Square, captured: Option<Piece>, out: &mut Vec<ChessMove>) {
    for promo in PieceKind::PROMOTIONS {
        out.push(ChessMove::promotion(*pawn, to, captured, promo));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{MoveKind, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn pawn_moves(board: &Board, square: &str) -> Vec<crate::game_state::chess_move::ChessMove> {
        let pawn = board
            .piece_at(algebraic_to_square(square).expect("square should parse"))
            .expect("pawn should be present");
        let mut out = Vec::new();
        generate_pawn_moves(board, pawn, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let board = Board::new_game();
        let moves = pawn_moves(&board, "e2");
        let targets: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
        assert_eq!(targets, vec!["e3", "e4"]);
    }

    #[test]
    fn blocked_double_push_is_not_generated() {
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("test FEN should parse");
        assert!(pawn_moves(&board, "e2").is_empty());

        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("test FEN should parse");
        assert_eq!(pawn_moves(&board, "e2").len(), 1);
    }

    #[test]
    fn last_rank_yields_all_four_promotions_and_no_plain_advance() {
        let board = Board::from_fen("3r2k1/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("test FEN should parse");
        let moves = pawn_moves(&board, "e7");
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Promotion));
        let push_kinds: Vec<PieceKind> = moves
            .iter()
            .filter(|m| !m.is_capture())
            .filter_map(|m| m.promotion)
            .collect();
        assert_eq!(
            push_kinds,
            vec![PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
        );
    }

    #[test]
    fn en_passant_only_right_after_the_double_push() {
        let mut board = Board::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").expect("test FEN should parse");
        let mv = parse_long_algebraic("d7d5", &board).expect("move should parse");
        board.apply_move(&mv).expect("double push should be legal");

        let ep: Vec<_> = pawn_moves(&board, "e5")
            .into_iter()
            .filter(|m| m.kind == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to.to_string(), "d6");
        assert_eq!(
            ep[0].captured.map(|p| p.square.to_string()).as_deref(),
            Some("d5")
        );

        for lan in ["e1e2", "e8e7"] {
            let mv = parse_long_algebraic(lan, &board).expect("move should parse");
            board.apply_move(&mv).expect("king move should be legal");
        }
        assert!(pawn_moves(&board, "e5")
            .iter()
            .all(|m| m.kind != MoveKind::EnPassant));
    }
}
