//! One-ply look-ahead bot.
//!
//! Every legal move is simulated on a snapshot of the piece list and the
//! resulting position is scored for the acting side. The first move reaching
//! the highest score wins.

use tracing::{info, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Ai, BotConfig};
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::search::board_scoring::PositionEvaluation;
use crate::search::simulate::simulate_move;

pub struct OnePlyBot<E> {
    config: BotConfig,
    evaluator: E,
}

impl<E: PositionEvaluation> OnePlyBot<E> {
    pub fn new(config: BotConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<E: PositionEvaluation> Ai for OnePlyBot<E> {
    fn config(&self) -> &BotConfig {
        &self.config
    }

    fn find_strategic_move(&self, board: &Board) -> ChessResult<ChessMove> {
        let acting = board.side_to_move();
        let legal_moves = board.all_legal_moves();

        let mut best: Option<(ChessMove, i32)> = None;
        for mv in legal_moves {
            let simulated = simulate_move(board.pieces(), &mv)?;
            let score = self.evaluator.evaluate(&simulated.pieces, acting);
            trace!(bot = %self.config.name, mv = %mv, score, "candidate scored");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(ChessError::NoLegalMoves)?;
        info!(bot = %self.config.name, mv = %mv, score, "one-ply move chosen");
        Ok(mv)
    }
}
