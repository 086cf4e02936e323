//! Pawn step tables.
//!
//! One move-only step forward and two capture-only diagonals, mirrored for
//! black. The extra forward step from the home rank is not a table entry; the
//! generator adds it when the pawn still stands on its home rank.

use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::{StepDirection, StepRule};

pub const WHITE_PAWN_DIRECTIONS: [StepDirection; 3] = [
    StepDirection {
        d_file: 0,
        d_rank: 1,
        rule: StepRule::MoveOnly,
    },
    StepDirection {
        d_file: -1,
        d_rank: 1,
        rule: StepRule::CaptureOnly,
    },
    StepDirection {
        d_file: 1,
        d_rank: 1,
        rule: StepRule::CaptureOnly,
    },
];

pub const BLACK_PAWN_DIRECTIONS: [StepDirection; 3] = [
    StepDirection {
        d_file: 0,
        d_rank: -1,
        rule: StepRule::MoveOnly,
    },
    StepDirection {
        d_file: -1,
        d_rank: -1,
        rule: StepRule::CaptureOnly,
    },
    StepDirection {
        d_file: 1,
        d_rank: -1,
        rule: StepRule::CaptureOnly,
    },
];

#[inline]
pub fn pawn_directions(color: Color) -> &'static [StepDirection] {
    match color {
        Color::White => &WHITE_PAWN_DIRECTIONS,
        Color::Black => &BLACK_PAWN_DIRECTIONS,
    }
}
