//! Fixed-depth minimax bot.

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Ai, BotConfig};
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::search::board_scoring::PositionEvaluation;
use crate::search::minimax::minimax_search;

pub struct MinimaxBot<E> {
    config: BotConfig,
    evaluator: E,
}

impl<E: PositionEvaluation> MinimaxBot<E> {
    pub fn new(config: BotConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<E: PositionEvaluation> Ai for MinimaxBot<E> {
    fn config(&self) -> &BotConfig {
        &self.config
    }

    fn find_strategic_move(&self, board: &Board) -> ChessResult<ChessMove> {
        let outcome = minimax_search(board, self.config.depth, &self.evaluator)?;
        let mv = outcome.best_move.ok_or(ChessError::NoLegalMoves)?;
        info!(
            bot = %self.config.name,
            depth = self.config.depth,
            mv = %mv,
            score = outcome.score,
            nodes = outcome.nodes,
            "minimax move chosen"
        );
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxBot;
    use crate::chess_errors::ChessError;
    use crate::engines::engine_trait::{Ai, BotConfig};
    use crate::game_state::board::Board;
    use crate::search::board_scoring::MaterialEvaluation;

    fn bot(depth: u8) -> MinimaxBot<MaterialEvaluation> {
        MinimaxBot::new(BotConfig::new("Magnus", "magnus", 2850, depth), MaterialEvaluation)
    }

    #[test]
    fn delivers_back_rank_mate() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("test FEN should parse");
        let chosen = bot(2).find_strategic_move(&board).expect("white has moves");
        assert_eq!(chosen.to_string(), "a1a8");
    }

    #[test]
    fn dark_side_also_finds_mate() {
        let board = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("test FEN should parse");
        let chosen = bot(2).find_strategic_move(&board).expect("black has moves");
        assert_eq!(chosen.to_string(), "a8a1");
    }

    #[test]
    fn search_does_not_touch_the_live_board() {
        let board = Board::new_game();
        let before = board.to_fen();
        let a = bot(3).find_strategic_move(&board).expect("start position has moves");
        let b = bot(3).find_strategic_move(&board).expect("start position has moves");
        assert_eq!(a, b);
        assert_eq!(board.to_fen(), before);
        assert_eq!(board.pieces(), Board::new_game().pieces());
    }

    #[test]
    fn stalemated_side_reports_no_legal_moves() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("test FEN should parse");
        let err = bot(2).find_strategic_move(&board).expect_err("stalemated side has no move");
        assert_eq!(err, ChessError::NoLegalMoves);
    }
}
