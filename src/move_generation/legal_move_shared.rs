use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::piece::Piece;

/// (row, column) steps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// (row, column) steps of a king, also the union of all slider directions.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Single-step moves to each offset that is on the board and not own-occupied.
pub fn push_step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<ChessMove>) {
    for &(d_row, d_col) in offsets {
        let Some(to) = piece.square.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(other) if other.color == piece.color => {}
            occupant => out.push(ChessMove::new(*piece, to, occupant.copied())),
        }
    }
}

/// Slide along each direction until the edge or the first occupied square,
/// which is included only when it holds an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = piece.square;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => out.push(ChessMove::new(*piece, to, None)),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(ChessMove::new(*piece, to, Some(*other)));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
