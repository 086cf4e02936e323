//! King step table. Castling destinations are added separately by
//! `move_generation::legal_moves_king` because they depend on board state.

use crate::moves::move_descriptions::StepDirection;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub const KING_DIRECTIONS: [StepDirection; 8] = QUEEN_DIRECTIONS;
