//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by board mutation, parsing
//! utilities, and the bots. Move rejection has its own `IllegalMoveError` so
//! callers applying user input can match on the exact reason.
//!
//! Usage guidelines:
//! - Functions return `ChessResult<T>` for recoverable failure modes (invalid
//!   input, illegal moves, exhausted positions).
//! - `SimulationError` reports a search primitive being handed a move that does
//!   not fit its position. It indicates a bug in the caller, not bad input.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Reasons `Board::apply_move` refuses a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// There is no piece on the origin square.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// The origin piece belongs to the side that is not to move.
    #[error("piece on {square} belongs to {owner:?} but {to_move:?} is to move")]
    WrongSideToMove {
        square: Square,
        owner: Color,
        to_move: Color,
    },

    /// The move is geometrically impossible or leaves the own king in check.
    #[error("move {from}{to} is not in the legal move set")]
    NotLegal { from: Square, to: Square },
}

/// Failures of the piece-list simulation primitive used by the bots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No piece in the snapshot stands on the move's origin.
    #[error("simulated move has no piece at origin {0}")]
    NoPieceAtOrigin(Square),
}

/// Unified error type for the chess engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveError),

    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// The FEN string could not be parsed or describes an invalid position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in algebraic notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// PGN text could not be parsed.
    #[error("invalid PGN: {0}")]
    InvalidPgn(String),

    /// The side to move has no legal moves (checkmate or stalemate).
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A replay or undo asked for more plies than were played.
    #[error("ply {requested} is beyond a history of {available} plies")]
    HistoryOutOfRange { requested: usize, available: usize },
}

/// Result type alias for chess engine operations.
pub type ChessResult<T> = Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_move_errors_render_squares_algebraically() {
        let from = Square::new(1, 4).expect("e2 is on the board");
        let to = Square::new(4, 4).expect("e5 is on the board");
        let err: ChessError = IllegalMoveError::NotLegal { from, to }.into();
        assert_eq!(
            err.to_string(),
            "illegal move: move e2e5 is not in the legal move set"
        );
    }
}
