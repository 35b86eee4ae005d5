use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};

#[inline]
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`, looking outward
/// from the square along each attack pattern.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
    };

    // An attacking pawn sits one row behind the square from its own point of view.
    let pawn_row = -attacker_color.forward();
    if holds(square.offset(pawn_row, -1), &[PieceKind::Pawn])
        || holds(square.offset(pawn_row, 1), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    ray_hits(board, square, &DIAGONAL_DIRECTIONS, attacker_color, &[PieceKind::Bishop, PieceKind::Queen])
        || ray_hits(board, square, &ORTHOGONAL_DIRECTIONS, attacker_color, &[PieceKind::Rook, PieceKind::Queen])
}

fn ray_hits(
    board: &Board,
    square: Square,
    directions: &[(i8, i8)],
    attacker_color: Color,
    sliders: &[PieceKind],
) -> bool {
    for &(dr, dc) in directions {
        let mut cursor = square;
        while let Some(next) = cursor.offset(dr, dc) {
            if let Some(piece) = board.piece_at(next) {
                if piece.color == attacker_color && sliders.contains(&piece.kind) {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}
