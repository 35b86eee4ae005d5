//! Board-to-FEN serializer.
//!
//! Produces canonical Forsyth-Edwards Notation from the board, including
//! side-to-move, castling rights, en-passant target, and clocks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn generate_fen(board: &Board) -> String {
    let mut out = String::with_capacity(90);

    for row in (0..8u8).rev() {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match board.piece_at(Square { row, col }) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match board.side_to_move() {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out.push(' ');
    out.push_str(&castling_field(board.castling_rights()));

    out.push(' ');
    match board.en_passant_target() {
        Some(square) => out.push_str(&square.to_string()),
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        board.halfmove_clock(),
        board.fullmove_number()
    ));
    out
}

fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::new();
    for (flag, ch) in [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ] {
        if rights & flag != 0 {
            field.push(ch);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}
