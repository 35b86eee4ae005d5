//! FEN-to-Board parser.
//!
//! Builds a fully-populated board from a Forsyth-Edwards Notation string,
//! including the piece list, rights, clocks, and the en-passant target.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    // Clocks are optional; many tools emit four-field FEN.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let placements = parse_placements(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;

    Board::from_parts(
        placements,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
        fen.split_whitespace().collect::<Vec<_>>().join(" "),
    )
}

fn parse_placements(board_part: &str) -> ChessResult<Vec<(Color, PieceKind, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut placements = Vec::with_capacity(32);
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let empty_count = usize::try_from(empty_count)
                    .map_err(|_| invalid(format!("invalid empty-square count '{ch}'")))?;
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                if col + empty_count > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                col += empty_count;
                continue;
            }

            let kind = PieceKind::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };

            let square = u8::try_from(col)
                .ok()
                .and_then(|col| Square::new(row, col))
                .ok_or_else(|| invalid("board rank has too many files"))?;
            if kind == PieceKind::Pawn && (row == 0 || row == 7) {
                return Err(invalid(format!("pawn on back rank at {square}")));
            }
            placements.push((color, kind, square));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(placements)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

/// The target sits behind a pawn of the side that just moved: rank 6 when
/// light is to move, rank 3 when dark is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    let expected_row = match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if square.row != expected_row {
        return Err(invalid(format!(
            "en-passant square {square} is not on the rank behind the {:?} pawn that just moved",
            side_to_move.opposite()
        )));
    }
    Ok(Some(square))
}
