//! Crate root module declarations for the chess bots library.
//!
//! This file exposes the rules engine (board, pieces, moves, legality and
//! game status), the move simulation and search primitives, the configurable
//! bots built on them, and the notation helpers used by the self-play binary
//! and tests.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_status;
    pub mod piece;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod legal_move_shared;
    pub mod perft;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod simulate;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_one_ply;
    pub mod engine_trait;
    pub mod presets;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use engines::engine_trait::{Ai, BotConfig};
pub use game_state::board::Board;
pub use game_state::chess_move::ChessMove;
pub use game_state::chess_types::{Color, PieceKind, Square};
pub use game_state::game_status::GameStatus;
pub use game_state::piece::Piece;
