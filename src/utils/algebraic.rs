//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values, reused by the FEN, long-algebraic, and PGN components.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Ok(Square {
        row: rank - b'1',
        col: file - b'a',
    })
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse"),
            Square { row: 0, col: 0 }
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse").index(),
            63
        );
        assert_eq!(square_to_algebraic(Square { row: 3, col: 4 }), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
