//! Long algebraic (`e2e4`, `e7e8q`) move notation.
//!
//! Parsing resolves the text against the board's legal move set, so the
//! returned move carries the correct capture and special-move tag.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::PieceKind;
use crate::utils::algebraic::algebraic_to_square;

#[inline]
pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    mv.to_string()
}

pub fn parse_long_algebraic(long_algebraic: &str, board: &Board) -> ChessResult<ChessMove> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_fen_char(ch) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => {
                return Err(ChessError::InvalidAlgebraic(format!(
                    "invalid promotion piece '{ch}' in {long_algebraic}"
                )))
            }
        },
    };

    board
        .legal_moves(from)
        .into_iter()
        .find(|mv| mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| {
            ChessError::InvalidAlgebraic(format!(
                "{long_algebraic} is not a legal move in this position"
            ))
        })
}
