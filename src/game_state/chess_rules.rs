//! Canonical chess-rule constants and board geometry.
//!
//! Home ranks, castling squares and promotion ranks are derived from
//! `BoardDims` so the same rules work on boards other than 8x8. On the default
//! board they reduce to the usual e1/h1/a1 layout.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Optional prefix accepted in front of a FEN string.
pub const FEN_PREFIX: &str = "FEN: ";

/// File the king starts on (the e-file).
pub const KING_HOME_FILE: u8 = 5;

#[inline]
pub fn back_rank(dims: BoardDims, color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => dims.ranks,
    }
}

#[inline]
pub fn pawn_home_rank(dims: BoardDims, color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => dims.ranks.saturating_sub(1),
    }
}

#[inline]
pub fn promotion_rank(dims: BoardDims, color: Color) -> u8 {
    back_rank(dims, color.opposite())
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPlan {
    pub king_origin: Square,
    pub king_destination: Square,
    pub rook_origin: Square,
    pub rook_destination: Square,
}

impl CastlingPlan {
    /// Squares strictly between king and rook; all must be empty.
    pub fn between(&self) -> Vec<Square> {
        let rank = self.king_origin.rank();
        let (low, high) = ordered(self.king_origin.file(), self.rook_origin.file());
        ((low + 1)..high).map(|file| Square::new(file, rank)).collect()
    }

    /// Squares the king stands on or crosses, origin and destination included.
    pub fn king_path(&self) -> Vec<Square> {
        let rank = self.king_origin.rank();
        let (low, high) = ordered(self.king_origin.file(), self.king_destination.file());
        (low..=high).map(|file| Square::new(file, rank)).collect()
    }
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Castling geometry, or `None` when the board is too narrow for it.
pub fn castling_plan(dims: BoardDims, color: Color, side: CastleSide) -> Option<CastlingPlan> {
    if dims.files < 8 {
        return None;
    }

    let rank = back_rank(dims, color);
    let king_origin = Square::new(KING_HOME_FILE, rank);
    let plan = match side {
        CastleSide::KingSide => CastlingPlan {
            king_origin,
            king_destination: Square::new(dims.files - 1, rank),
            rook_origin: Square::new(dims.files, rank),
            rook_destination: Square::new(dims.files - 2, rank),
        },
        CastleSide::QueenSide => CastlingPlan {
            king_origin,
            king_destination: Square::new(3, rank),
            rook_origin: Square::new(1, rank),
            rook_destination: Square::new(4, rank),
        },
    };

    Some(plan)
}

/// Castling right of `color` lost when its rook leaves, or is captured on, `square`.
pub fn rook_home_right(dims: BoardDims, color: Color, square: Square) -> Option<CastlingRights> {
    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| {
            castling_plan(dims, color, *side).is_some_and(|plan| plan.rook_origin == square)
        })
        .map(|side| castle_flag(color, side))
}
