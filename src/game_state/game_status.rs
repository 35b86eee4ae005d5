//! Game state classification evaluated once per ply.
//!
//! Checkmate and stalemate come straight from the legal move filter. The draw
//! states are layered on the half-move clock and the position history.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_HALFMOVES, REPETITION_LIMIT};
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_filter::LegalMoveFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a reply.
    Check,
    Checkmate,
    Stalemate,
    DrawByFiftyMoveRule,
    DrawByRepetition,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }

    /// PGN result token, given who was to move when the status was taken.
    pub const fn result_token(self, side_to_move: Color) -> &'static str {
        match self {
            GameStatus::Checkmate => match side_to_move {
                Color::Light => "0-1",
                Color::Dark => "1-0",
            },
            GameStatus::Stalemate
            | GameStatus::DrawByFiftyMoveRule
            | GameStatus::DrawByRepetition => "1/2-1/2",
            GameStatus::Ongoing | GameStatus::Check => "*",
        }
    }
}

/// Classify the position for the side to move.
pub fn evaluate_game_status(board: &Board) -> GameStatus {
    let in_check = board.is_in_check(board.side_to_move());
    let has_move = LegalMoveFilter.has_legal_move_in_place(&mut board.clone());

    match (in_check, has_move) {
        (true, false) => return GameStatus::Checkmate,
        (false, false) => return GameStatus::Stalemate,
        _ => {}
    }

    if board.halfmove_clock() >= FIFTY_MOVE_RULE_HALFMOVES {
        return GameStatus::DrawByFiftyMoveRule;
    }
    if is_repetition(board) {
        return GameStatus::DrawByRepetition;
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

/// Fifty-move rule or a third occurrence of the current position.
pub fn is_rule_draw(board: &Board) -> bool {
    board.halfmove_clock() >= FIFTY_MOVE_RULE_HALFMOVES
        || current_position_occurrences(board) >= REPETITION_LIMIT
}

/// How often the current position has occurred, looking back no further than
/// the last capture or pawn move.
pub fn current_position_occurrences(board: &Board) -> usize {
    let keys = board.position_keys();
    let Some(current) = keys.last() else {
        return 0;
    };
    keys.iter()
        .rev()
        .take(usize::from(board.halfmove_clock()) + 1)
        .filter(|key| *key == current)
        .count()
}

fn is_repetition(board: &Board) -> bool {
    let mut seen = HashMap::new();
    board.position_keys().iter().any(|key| {
        let count = seen.entry(key).or_insert(0usize);
        *count += 1;
        *count >= REPETITION_LIMIT
    })
}
