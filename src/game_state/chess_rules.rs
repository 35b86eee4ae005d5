//! Canonical chess-rule constants.
//!
//! Static rule literals such as the standard starting position FEN and the
//! draw thresholds layered on top of the move history.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value at which the fifty-move rule applies.
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;

/// Occurrences of one position that end the game by repetition.
pub const REPETITION_LIMIT: usize = 3;
