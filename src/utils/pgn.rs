//! PGN read/write utilities for game history interchange.
//!
//! Serializes the move history and headers to PGN text (with long algebraic
//! movetext) and parses such PGN back into a replayed board.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    /// Board after replaying every move; its history is the game.
    pub board: Board,
    pub result: String,
}

/// Default seven-tag roster for `board`, dated today.
pub fn default_headers(white: &str, black: &str, result: &str) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Bot Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());
    headers
}

pub fn write_pgn(board: &Board, white: &str, black: &str, result: &str) -> String {
    write_pgn_with_headers(board, &default_headers(white, black, result))
}

pub fn write_pgn_with_headers(board: &Board, headers: &BTreeMap<String, String>) -> String {
    let mut headers = headers.clone();
    if board.initial_fen() != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), board.initial_fen().to_owned());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // Move numbers follow the initial position's side to move.
    let dark_first = board
        .initial_fen()
        .split_whitespace()
        .nth(1)
        .is_some_and(|side| side == "b");
    let first_number: usize = board
        .initial_fen()
        .split_whitespace()
        .nth(5)
        .and_then(|n| n.parse().ok())
        .unwrap_or(1);

    let mut movetext_parts = Vec::<String>::with_capacity(board.history().len() + 1);
    for (ply, mv) in board.history().iter().enumerate() {
        let lan = move_to_long_algebraic(mv);
        let offset_ply = ply + dark_first as usize;
        let number = first_number + offset_ply / 2;
        if offset_ply % 2 == 0 {
            movetext_parts.push(format!("{number}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{number}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

pub fn read_pgn(pgn: &str) -> ChessResult<PgnGame> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let mut board = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or_else(|| ChessError::InvalidPgn("SetUp is 1 but the FEN header is missing".to_owned()))?;
        Board::from_fen(fen)?
    } else {
        Board::new_game()
    };

    let mut result = "*".to_owned();
    let movetext = strip_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        let mv = parse_long_algebraic(trim_annotation_suffix(token), &board)
            .map_err(|e| ChessError::InvalidPgn(format!("bad move token '{token}': {e}")))?;
        board.apply_move(&mv)?;
    }

    Ok(PgnGame {
        headers,
        board,
        result,
    })
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let inner = line
        .strip_prefix('[')
        .and_then(|x| x.strip_suffix(']'))
        .ok_or_else(|| ChessError::InvalidPgn(format!("malformed header line: {line}")))?;
    let (key, rest) = inner
        .split_once(' ')
        .ok_or_else(|| ChessError::InvalidPgn(format!("header without value: {line}")))?;
    let value = rest
        .trim()
        .strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
        .ok_or_else(|| ChessError::InvalidPgn(format!("header value must be quoted: {line}")))?;
    Ok((key.to_owned(), value.replace("\\\"", "\"").replace("\\\\", "\\")))
}

fn strip_comments_and_variations(movetext: &str) -> String {
    let mut out = String::with_capacity(movetext.len());
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;
    for ch in movetext.chars() {
        match ch {
            '{' => brace_depth += 1,
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' if brace_depth == 0 => paren_depth += 1,
            ')' if brace_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(['!', '?', '+', '#'])
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{read_pgn, write_pgn};
    use crate::game_state::board::Board;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn play(board: &mut Board, moves: &[&str]) {
        for lan in moves {
            let mv = parse_long_algebraic(lan, board).expect("test move should parse");
            board.apply_move(&mv).expect("test move should be legal");
        }
    }

    #[test]
    fn written_pgn_reads_back_to_the_same_game() {
        let mut board = Board::new_game();
        play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        let pgn = write_pgn(&board, "Martin", "Magnus", "0-1");
        assert!(pgn.contains("[White \"Martin\"]"));
        assert!(pgn.contains("1. f2f3 e7e5 2. g2g4 d8h4 0-1"));

        let game = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(game.result, "0-1");
        assert_eq!(game.board.to_fen(), board.to_fen());
        assert_eq!(game.board.history(), board.history());
        assert_eq!(game.headers.get("Black").map(String::as_str), Some("Magnus"));
    }

    #[test]
    fn custom_start_positions_carry_fen_tags_and_black_move_numbers() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4p3/4K3 b - - 0 12").expect("test FEN should parse");
        play(&mut board, &["e8d7", "e1e2"]);

        let pgn = write_pgn(&board, "A", "B", "*");
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("12... e8d7 13. e1e2 *"));

        let game = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(game.board.to_fen(), board.to_fen());
    }

    #[test]
    fn comments_variations_and_annotations_are_ignored() {
        let pgn = "[Event \"x\"]\n\n1. e2e4! {centre} e7e5 (1... c7c5) 2. g1f3?! *\n";
        let game = read_pgn(pgn).expect("PGN should parse");
        assert_eq!(game.board.history().len(), 3);
        assert_eq!(game.result, "*");
    }

    #[test]
    fn illegal_movetext_is_reported() {
        assert!(read_pgn("1. e2e5 *").is_err());
        assert!(read_pgn("[SetUp \"1\"]\n1. e2e4 *").is_err());
    }
}
