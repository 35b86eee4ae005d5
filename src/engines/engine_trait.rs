//! Bot abstraction shared by every preset.
//!
//! A bot is a named, configured strategy that turns a board into one move.
//! Bots are stateless between calls, so the same board always yields the
//! same move.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;

/// Construction parameters for a bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub name: String,
    pub sprite_id: String,
    pub elo: u32,
    /// Plies searched. Zero and one both mean a single-ply look-ahead.
    pub depth: u8,
    /// Centralization bonus per step toward the centre. Zero scores
    /// material only.
    #[serde(default)]
    pub centralization_weight: i32,
}

impl BotConfig {
    pub fn new(name: impl Into<String>, sprite_id: impl Into<String>, elo: u32, depth: u8) -> Self {
        Self {
            name: name.into(),
            sprite_id: sprite_id.into(),
            elo,
            depth,
            centralization_weight: 0,
        }
    }

    pub fn with_centralization_weight(mut self, weight: i32) -> Self {
        self.centralization_weight = weight;
        self
    }
}

pub trait Ai: Send + Sync {
    fn config(&self) -> &BotConfig;

    fn name(&self) -> &str {
        &self.config().name
    }

    /// Pick a move for the side to move on `board` without mutating it.
    ///
    /// Fails with `ChessError::NoLegalMoves` when the side to move has none.
    fn find_strategic_move(&self, board: &Board) -> ChessResult<ChessMove>;
}
