//! Attack and check queries.
//!
//! A square is attacked when it appears among the attack destinations of some
//! opposing piece. This costs O(pieces x directions) per query, which is the
//! price of defining check operationally instead of with pin tables.

use std::collections::BTreeSet;

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_generator::attack_destinations;
use crate::move_generation::legal_move_shared::pieces_of_color;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = Piece::new(PieceKind::King, color);
    pieces_of_color(board, color)
        .find(|(piece, _)| *piece == king)
        .map(|(_, square)| square)
}

/// Whether `color`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    attacked_by(board, king_sq, color.opposite())
}

pub fn attacked_by(board: &Board, square: Square, attacker_color: Color) -> bool {
    pieces_of_color(board, attacker_color)
        .any(|(piece, from)| attack_destinations(board, piece, from).contains(&square))
}

pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Piece, Square)> {
    pieces_of_color(board, attacker_color)
        .filter(|(piece, from)| attack_destinations(board, *piece, *from).contains(&square))
        .collect()
}

/// Pieces of either color attacking `square`.
pub fn attacking_pieces(board: &Board, square: Square) -> BTreeSet<(Piece, Square)> {
    let mut attackers = BTreeSet::new();
    for color in [Color::White, Color::Black] {
        attackers.extend(attackers_to_square(board, square, color));
    }
    attackers
}
