//! Queen directions: the rook's orthogonals followed by the bishop's diagonals.

use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::StepDirection;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [StepDirection; 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];
