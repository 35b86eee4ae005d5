//! Perft move-path enumeration used to validate the rules implementation.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::MoveKind;
use crate::move_generation::legal_move_checks::is_king_attacked;
use crate::move_generation::legal_move_filter::LegalMoveFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf move paths of length `depth` from `board`.
pub fn perft(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    let mut scratch = board.clone();
    perft_in_place(&mut scratch, depth)
}

/// Leaf counts per root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> ChessResult<Vec<(ChessMove, u64)>> {
    let mut scratch = board.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in LegalMoveFilter.all_legal_moves_in_place(&mut scratch) {
        scratch.make_move(&mv)?;
        let counts = perft_in_place(&mut scratch, depth - 1)?;
        scratch.unmake_move();
        out.push((mv, counts.nodes));
    }
    Ok(out)
}

fn perft_in_place(board: &mut Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = LegalMoveFilter.all_legal_moves_in_place(board);
    let mut total = PerftCounts::default();

    for mv in moves {
        board.make_move(&mv)?;
        if depth == 1 {
            total.merge(leaf_counts(board, &mv));
        } else {
            total.merge(perft_in_place(board, depth - 1)?);
        }
        board.unmake_move();
    }

    Ok(total)
}

/// Counts for a leaf reached by `mv`; `board` is the position after it.
fn leaf_counts(board: &mut Board, mv: &ChessMove) -> PerftCounts {
    let gives_check = is_king_attacked(board, board.side_to_move());
    let is_checkmate = gives_check && !LegalMoveFilter.has_legal_move_in_place(board);
    PerftCounts {
        nodes: 1,
        captures: mv.is_capture() as u64,
        en_passant: (mv.kind == MoveKind::EnPassant) as u64,
        castles: (mv.kind == MoveKind::Castle) as u64,
        promotions: mv.promotion.is_some() as u64,
        checks: gives_check as u64,
        checkmates: is_checkmate as u64,
    }
}
