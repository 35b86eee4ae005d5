//! Core board state representation.
//!
//! `Board` is the central model for the engine. It owns every piece, keeps an
//! 8x8 grid of indices into the piece list for positional queries, tracks
//! turn/castling/en-passant/clock state, and records the move history together
//! with an undo stack used by make/unmake style workflows.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult, IllegalMoveError};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{evaluate_game_status, GameStatus};
use crate::game_state::piece::Piece;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::{is_king_attacked, is_square_attacked};
use crate::move_generation::legal_move_filter::LegalMoveFilter;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Identity of a position for repetition detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    cells: [Option<(Color, PieceKind)>; 64],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    // [row][col] -> index into `pieces`.
    grid: [[Option<usize>; 8]; 8],

    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,

    halfmove_clock: u16,
    fullmove_number: u16,

    // --- History / replay support ---
    initial_fen: String,
    history: Vec<ChessMove>,
    undo_stack: Vec<UndoState>,
    position_keys: Vec<PositionKey>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Standard starting position with white to move.
    pub fn new_game() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for (row, color) in [(0u8, Color::Light), (1, Color::Light), (6, Color::Dark), (7, Color::Dark)] {
            for col in 0u8..8 {
                let kind = if row == 1 || row == 6 {
                    PieceKind::Pawn
                } else {
                    BACK_RANK[col as usize]
                };
                pieces.push(Piece::new(kind, color, Square { row, col }));
            }
        }

        let mut board = Self::empty(
            pieces,
            Color::Light,
            CASTLE_ALL,
            None,
            0,
            1,
            STARTING_POSITION_FEN.to_owned(),
        );
        board.position_keys.push(board.position_key());
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assemble a board from parsed placements, validating the structural
    /// invariants: one king per color and no shared squares.
    ///
    /// Pieces are stored in ascending square order. Castling rights that are
    /// not backed by a king and rook on their home squares are dropped.
    pub(crate) fn from_parts(
        mut placements: Vec<(Color, PieceKind, Square)>,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
        initial_fen: String,
    ) -> ChessResult<Self> {
        placements.sort_by_key(|(_, _, sq)| sq.index());
        if placements.windows(2).any(|w| w[0].2 == w[1].2) {
            return Err(ChessError::InvalidFen(
                "two pieces share a square".to_owned(),
            ));
        }
        for color in [Color::Light, Color::Dark] {
            let kings = placements
                .iter()
                .filter(|(c, k, _)| *c == color && *k == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "expected exactly one {color:?} king, found {kings}"
                )));
            }
        }

        let mut rights = castling_rights;
        for color in [Color::Light, Color::Dark] {
            let row = color.back_rank();
            let king_home = placements
                .iter()
                .any(|(c, k, sq)| *c == color && *k == PieceKind::King && *sq == Square { row, col: 4 });
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                let rook_home = Square {
                    row,
                    col: side.rook_home_col(),
                };
                let rook_present = placements
                    .iter()
                    .any(|(c, k, sq)| *c == color && *k == PieceKind::Rook && *sq == rook_home);
                if !(king_home && rook_present) {
                    rights &= !side.right(color);
                }
            }
        }

        // A target only stands behind an enemy pawn that could have just
        // double-pushed past it.
        let en_passant_target = en_passant_target.filter(|target| {
            let occupied = placements.iter().any(|(_, _, sq)| sq == target);
            let victim = target.offset(-side_to_move.forward(), 0);
            let pawn_behind = placements.iter().any(|(c, k, sq)| {
                *c == side_to_move.opposite() && *k == PieceKind::Pawn && Some(*sq) == victim
            });
            !occupied && pawn_behind
        });

        let pieces = placements
            .into_iter()
            .map(|(color, kind, square)| {
                let mut piece = Piece::new(kind, color, square);
                piece.has_moved = !starts_unmoved(&piece, rights);
                piece
            })
            .collect();

        let mut board = Self::empty(
            pieces,
            side_to_move,
            rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            initial_fen,
        );
        board.position_keys.push(board.position_key());
        Ok(board)
    }

    fn empty(
        pieces: Vec<Piece>,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
        initial_fen: String,
    ) -> Self {
        let mut board = Self {
            pieces,
            grid: [[None; 8]; 8],
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            initial_fen,
            history: Vec::new(),
            undo_stack: Vec::new(),
            position_keys: Vec::new(),
        };
        board.reindex();
        board
    }

    // --- Queries ---

    /// Read-only snapshot of every piece in board order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.row as usize][square.col as usize].map(|i| &self.pieces[i])
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn initial_fen(&self) -> &str {
        &self.initial_fen
    }

    /// Keys of every position reached so far, the initial one first.
    #[inline]
    pub fn position_keys(&self) -> &[PositionKey] {
        &self.position_keys
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.square)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(self, color)
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        is_square_attacked(self, square, by)
    }

    /// Legal moves of the piece on `square`; empty unless it belongs to the
    /// side to move.
    #[inline]
    pub fn legal_moves(&self, square: Square) -> Vec<ChessMove> {
        LegalMoveFilter.legal_moves(self, square)
    }

    /// Legal moves of every piece of the side to move, in piece order.
    #[inline]
    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        LegalMoveFilter.all_legal_moves(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        evaluate_game_status(self)
    }

    // --- Mutation ---

    /// Validate `mv` against the legal move set and commit it.
    ///
    /// Only origin, destination and promotion choice of `mv` are trusted; the
    /// generated move with the same path is what gets applied and returned.
    pub fn apply_move(&mut self, mv: &ChessMove) -> ChessResult<ChessMove> {
        let piece = *self
            .piece_at(mv.from)
            .ok_or(IllegalMoveError::EmptyOrigin(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(IllegalMoveError::WrongSideToMove {
                square: mv.from,
                owner: piece.color,
                to_move: self.side_to_move,
            }
            .into());
        }

        let canonical = self
            .legal_moves(mv.from)
            .into_iter()
            .find(|legal| legal.same_path(mv))
            .ok_or(IllegalMoveError::NotLegal {
                from: mv.from,
                to: mv.to,
            })?;

        self.make_move(&canonical)?;
        debug!(
            mv = %canonical,
            ply = self.history.len(),
            fen = %self.to_fen(),
            "applied move"
        );
        Ok(canonical)
    }

    /// Revert the last move. Returns `None` when no move has been played.
    pub fn undo(&mut self) -> Option<ChessMove> {
        let mv = self.unmake_move()?;
        debug!(mv = %mv, ply = self.history.len(), "undid move");
        Some(mv)
    }

    /// Reconstruct the board as it stood after `ply` plies of this game.
    pub fn replay(&self, ply: usize) -> ChessResult<Board> {
        if ply > self.history.len() {
            return Err(ChessError::HistoryOutOfRange {
                requested: ply,
                available: self.history.len(),
            });
        }
        let mut board = Board::from_fen(&self.initial_fen)?;
        for mv in &self.history[..ply] {
            board.apply_move(mv)?;
        }
        Ok(board)
    }

    /// Apply a generated move without checking legality.
    ///
    /// The move must have been generated for this exact position. Fails only
    /// when the origin square is empty.
    pub(crate) fn make_move(&mut self, mv: &ChessMove) -> ChessResult<()> {
        let mut mover_index = self
            .index_at(mv.from)
            .ok_or(IllegalMoveError::EmptyOrigin(mv.from))?;

        let mut rook = None;
        if mv.kind == MoveKind::Castle {
            if let Some(side) = CastleSide::from_king_target_col(mv.to.col) {
                let home = Square {
                    row: mv.from.row,
                    col: side.rook_home_col(),
                };
                if let Some(index) = self.index_at(home) {
                    rook = Some((index, side));
                }
            }
        }

        let captured = match mv.captured.and_then(|victim| self.index_at(victim.square)) {
            Some(index) => {
                let victim = self.pieces.remove(index);
                if index < mover_index {
                    mover_index -= 1;
                }
                Some((index, victim))
            }
            None => None,
        };

        let undo = UndoState {
            mv: *mv,
            mover_index,
            mover_before: self.pieces[mover_index],
            captured,
            rook: rook.map(|(index, _)| (index, self.pieces[index])),
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
        };

        let mover = &mut self.pieces[mover_index];
        mover.square = mv.to;
        mover.has_moved = true;
        if let Some(promo) = mv.promotion {
            mover.kind = promo;
        }
        let moving_color = mover.color;

        if let Some((index, side)) = rook {
            let rook_piece = &mut self.pieces[index];
            rook_piece.square = Square {
                row: mv.from.row,
                col: side.rook_target_col(),
            };
            rook_piece.has_moved = true;
        }

        self.update_castling_rights(mv, moving_color);

        self.en_passant_target = if mv.is_double_pawn_push() {
            Square::new((mv.from.row + mv.to.row) / 2, mv.from.col)
        } else {
            None
        };

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if moving_color == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opposite();
        self.reindex();

        self.history.push(*mv);
        self.undo_stack.push(undo);
        self.position_keys.push(self.position_key());
        Ok(())
    }

    /// Inverse of `make_move`, popping one undo record.
    pub(crate) fn unmake_move(&mut self) -> Option<ChessMove> {
        let undo = self.undo_stack.pop()?;
        self.history.pop();
        self.position_keys.pop();

        self.pieces[undo.mover_index] = undo.mover_before;
        if let Some((index, rook)) = undo.rook {
            self.pieces[index] = rook;
        }
        if let Some((index, victim)) = undo.captured {
            self.pieces.insert(index, victim);
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.side_to_move = self.side_to_move.opposite();
        self.reindex();

        Some(undo.mv)
    }

    fn update_castling_rights(&mut self, mv: &ChessMove, moving_color: Color) {
        if mv.piece.kind == PieceKind::King {
            self.castling_rights &= !(CastleSide::KingSide.right(moving_color)
                | CastleSide::QueenSide.right(moving_color));
        }

        // Moving from or capturing onto a rook home square removes that right.
        for square in [mv.from, mv.to] {
            for color in [Color::Light, Color::Dark] {
                if square.row != color.back_rank() {
                    continue;
                }
                for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                    if square.col == side.rook_home_col() {
                        self.castling_rights &= !side.right(color);
                    }
                }
            }
        }
    }

    #[inline]
    fn index_at(&self, square: Square) -> Option<usize> {
        self.grid[square.row as usize][square.col as usize]
    }

    fn reindex(&mut self) {
        self.grid = [[None; 8]; 8];
        for (index, piece) in self.pieces.iter().enumerate() {
            self.grid[piece.square.row as usize][piece.square.col as usize] = Some(index);
        }
    }

    fn position_key(&self) -> PositionKey {
        let mut cells = [None; 64];
        for piece in &self.pieces {
            cells[piece.square.index()] = Some((piece.color, piece.kind));
        }
        PositionKey {
            cells,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Whether a freshly placed piece still counts as never having moved.
fn starts_unmoved(piece: &Piece, rights: CastlingRights) -> bool {
    let row = piece.color.back_rank();
    match piece.kind {
        PieceKind::King => {
            piece.square == Square { row, col: 4 }
                && rights
                    & (CastleSide::KingSide.right(piece.color)
                        | CastleSide::QueenSide.right(piece.color))
                    != 0
        }
        PieceKind::Rook => [CastleSide::KingSide, CastleSide::QueenSide]
            .into_iter()
            .any(|side| {
                piece.square
                    == Square {
                        row,
                        col: side.rook_home_col(),
                    }
                    && rights & side.right(piece.color) != 0
            }),
        PieceKind::Pawn => piece.square.row as i8 == row as i8 + piece.color.forward(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("test square should parse")
    }

    fn play(board: &mut Board, moves: &[&str]) {
        for lan in moves {
            let mv = parse_long_algebraic(lan, board).expect("test move should parse");
            board.apply_move(&mv).expect("test move should be legal");
        }
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let board = Board::new_game();
        assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(board.pieces().len(), 32);
        assert_eq!(board.pieces()[0].square, sq("a1"));
        assert_eq!(board.all_legal_moves().len(), 20);
    }

    #[test]
    fn grid_slots_track_piece_coordinates() {
        let mut board = Board::new_game();
        play(&mut board, &["e2e4", "d7d5", "e4d5", "d8d5"]);
        for piece in board.pieces() {
            assert_eq!(board.piece_at(piece.square), Some(piece));
        }
        assert_eq!(board.pieces().len(), 30);
    }

    #[test]
    fn apply_move_rejects_wrong_side_and_illegal_moves() {
        let mut board = Board::new_game();
        let black_pawn = *board.piece_at(sq("e7")).expect("e7 has a pawn");
        let err = board
            .apply_move(&ChessMove::new(black_pawn, sq("e5"), None))
            .expect_err("black cannot move first");
        assert!(matches!(
            err,
            ChessError::IllegalMove(IllegalMoveError::WrongSideToMove { .. })
        ));

        let white_pawn = *board.piece_at(sq("e2")).expect("e2 has a pawn");
        let err = board
            .apply_move(&ChessMove::new(white_pawn, sq("e5"), None))
            .expect_err("pawns cannot jump three squares");
        assert!(matches!(
            err,
            ChessError::IllegalMove(IllegalMoveError::NotLegal { .. })
        ));

        let rook = *board.piece_at(sq("a1")).expect("a1 has a rook");
        let err = board
            .apply_move(&ChessMove::new(Piece { square: sq("a3"), ..rook }, sq("a4"), None))
            .expect_err("a3 is empty");
        assert!(matches!(
            err,
            ChessError::IllegalMove(IllegalMoveError::EmptyOrigin(_))
        ));
        assert!(board.history().is_empty());
    }

    #[test]
    fn en_passant_target_lives_for_one_ply() {
        let mut board = Board::new_game();
        play(&mut board, &["e2e4"]);
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        play(&mut board, &["g8f6"]);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn castling_rights_lost_when_rook_moves_or_is_captured() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1")
            .expect("test FEN should parse");
        play(&mut board, &["g2h1"]);
        assert_eq!(board.castling_rights() & CASTLE_LIGHT_KINGSIDE, 0);
        assert_ne!(board.castling_rights() & CASTLE_LIGHT_QUEENSIDE, 0);

        play(&mut board, &["a1b1", "a8b8"]);
        assert_eq!(board.castling_rights() & CASTLE_LIGHT_QUEENSIDE, 0);
        assert_eq!(board.castling_rights() & CASTLE_DARK_QUEENSIDE, 0);
        assert_ne!(board.castling_rights() & CASTLE_DARK_KINGSIDE, 0);
    }

    #[test]
    fn castling_relocates_the_rook() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        play(&mut board, &["e1g1", "e8c8"]);
        assert_eq!(board.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
        assert_eq!(board.history()[0].kind, MoveKind::Castle);
    }

    #[test]
    fn promotion_replaces_pawn_in_place() {
        let mut board = Board::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let pawn_index = board
            .pieces()
            .iter()
            .position(|p| p.kind == PieceKind::Pawn)
            .expect("pawn is on the board");
        play(&mut board, &["e7e8n"]);
        assert_eq!(board.pieces()[pawn_index].kind, PieceKind::Knight);
        assert_eq!(board.pieces()[pawn_index].square, sq("e8"));
    }

    #[test]
    fn undo_restores_fen_and_piece_order() {
        let mut board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("kiwipete should parse");
        let before_fen = board.to_fen();
        let before_pieces = board.pieces().to_vec();

        play(&mut board, &["e1c1", "h3g2", "f3f6", "g2h1q"]);
        for _ in 0..4 {
            assert!(board.undo().is_some());
        }

        assert_eq!(board.to_fen(), before_fen);
        assert_eq!(board.pieces(), before_pieces.as_slice());
        assert!(board.undo().is_none());
    }

    #[test]
    fn replay_reconstructs_intermediate_positions() {
        let mut board = Board::new_game();
        play(&mut board, &["e2e4", "e7e5", "g1f3"]);
        let after_two = board.replay(2).expect("two plies were played");
        assert_eq!(
            after_two.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
        );
        assert_eq!(board.replay(0).expect("ply zero exists").to_fen(), STARTING_POSITION_FEN);
        assert!(matches!(
            board.replay(4),
            Err(ChessError::HistoryOutOfRange { requested: 4, available: 3 })
        ));
    }
}
