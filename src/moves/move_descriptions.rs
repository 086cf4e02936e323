//! Per-piece movement descriptions.
//!
//! Every piece kind maps to a fixed table of step directions plus a repetition
//! policy. Each direction is tagged with what it may do when it lands:
//! move to an empty square, capture an enemy piece, or either. Exhaustive
//! matching on `PieceKind` keeps the tables complete.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_DIRECTIONS;
use crate::moves::knight_moves::KNIGHT_DIRECTIONS;
use crate::moves::pawn_moves::pawn_directions;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// What a step may do on the square it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRule {
    /// Only onto an empty square (pawn push).
    MoveOnly,
    /// Only onto an enemy piece (pawn diagonal, extended for en passant).
    CaptureOnly,
    Either,
}

impl StepRule {
    #[inline]
    pub const fn can_move(self) -> bool {
        !matches!(self, StepRule::CaptureOnly)
    }

    #[inline]
    pub const fn can_capture(self) -> bool {
        !matches!(self, StepRule::MoveOnly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDirection {
    pub d_file: i8,
    pub d_rank: i8,
    pub rule: StepRule,
}

impl StepDirection {
    pub const fn either(d_file: i8, d_rank: i8) -> Self {
        Self {
            d_file,
            d_rank,
            rule: StepRule::Either,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// One step per direction.
    Single,
    /// Keep stepping until the edge or the first occupied square.
    UntilBlocked,
}

#[derive(Debug, Clone, Copy)]
pub struct MovementPattern {
    pub directions: &'static [StepDirection],
    pub repetition: Repetition,
}

pub fn movement_pattern(piece: Piece) -> MovementPattern {
    match piece.kind {
        PieceKind::Pawn => MovementPattern {
            directions: pawn_directions(piece.color),
            repetition: Repetition::Single,
        },
        PieceKind::Knight => MovementPattern {
            directions: &KNIGHT_DIRECTIONS,
            repetition: Repetition::Single,
        },
        PieceKind::Bishop => MovementPattern {
            directions: &BISHOP_DIRECTIONS,
            repetition: Repetition::UntilBlocked,
        },
        PieceKind::Rook => MovementPattern {
            directions: &ROOK_DIRECTIONS,
            repetition: Repetition::UntilBlocked,
        },
        PieceKind::Queen => MovementPattern {
            directions: &QUEEN_DIRECTIONS,
            repetition: Repetition::UntilBlocked,
        },
        PieceKind::King => MovementPattern {
            directions: &KING_DIRECTIONS,
            repetition: Repetition::Single,
        },
    }
}

/// Promotion targets, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
