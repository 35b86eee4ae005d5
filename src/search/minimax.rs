//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The search runs on one scratch copy of the board using make/unmake, so
//! every branch sees an isolated position and the caller's board is never
//! mutated. Scores are always from the acting (root) side's perspective:
//! maximized on its plies, minimized on the opponent's. Positions drawn by
//! the fifty-move rule or threefold repetition score 0 unless they are mate.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::Color;
use crate::game_state::game_status::is_rule_draw;
use crate::move_generation::legal_move_filter::LegalMoveFilter;
use crate::search::board_scoring::{PositionEvaluation, MATE_SCORE};

const INFINITY: i32 = MATE_SCORE * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub nodes: u64,
}

/// Search `depth` plies (at least one) and return the best root move.
///
/// Root moves are compared with strict `>`, so among equally scored moves the
/// first one in generation order wins.
pub fn minimax_search<E: PositionEvaluation + ?Sized>(
    board: &Board,
    depth: u8,
    evaluator: &E,
) -> ChessResult<SearchOutcome> {
    let depth = depth.max(1);
    let mut scratch = board.clone();
    let acting = scratch.side_to_move();
    let root_moves = LegalMoveFilter.all_legal_moves_in_place(&mut scratch);

    let mut ctx = SearchContext {
        evaluator,
        acting,
        nodes: 0,
    };
    let mut best: Option<(ChessMove, i32)> = None;
    let mut alpha = -INFINITY;

    for mv in root_moves {
        scratch.make_move(&mv)?;
        let score = ctx.minimax(&mut scratch, depth - 1, alpha, INFINITY, 1)?;
        scratch.unmake_move();
        trace!(mv = %mv, score, "root move scored");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
            alpha = alpha.max(score);
        }
    }

    Ok(SearchOutcome {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(0, |(_, score)| score),
        nodes: ctx.nodes,
    })
}

struct SearchContext<'a, E: ?Sized> {
    evaluator: &'a E,
    acting: Color,
    nodes: u64,
}

impl<E: PositionEvaluation + ?Sized> SearchContext<'_, E> {
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: i32,
    ) -> ChessResult<i32> {
        self.nodes += 1;

        if is_rule_draw(board) {
            if !LegalMoveFilter.has_legal_move_in_place(board) {
                return Ok(self.terminal_score(board, ply));
            }
            return Ok(0);
        }

        if depth == 0 {
            if !LegalMoveFilter.has_legal_move_in_place(board) {
                return Ok(self.terminal_score(board, ply));
            }
            return Ok(self.evaluator.evaluate(board.pieces(), self.acting));
        }

        let moves = LegalMoveFilter.all_legal_moves_in_place(board);
        if moves.is_empty() {
            return Ok(self.terminal_score(board, ply));
        }

        let maximizing = board.side_to_move() == self.acting;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            board.make_move(&mv)?;
            let score = self.minimax(board, depth - 1, alpha, beta, ply + 1)?;
            board.unmake_move();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }

    /// Score of a position with no legal moves. Sooner mates score further
    /// from zero.
    fn terminal_score(&self, board: &Board, ply: i32) -> i32 {
        let to_move = board.side_to_move();
        if !board.is_in_check(to_move) {
            0
        } else if to_move == self.acting {
            -(MATE_SCORE - ply)
        } else {
            MATE_SCORE - ply
        }
    }
}
