//! Fully resolved move.
//!
//! Produced by the notation decoder (or built directly by tools such as
//! perft) and consumed by `Board::make_move`. A `ChessMove` holds everything
//! needed to apply it without looking at the text again.

use std::fmt;

use crate::game_state::chess_types::{GameResult, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: Piece,
    pub origin: Square,
    pub destination: Square,
    pub captured_piece: Option<Piece>,
    /// Square the captured piece stood on; differs from `destination` only for en passant.
    pub capture_square: Option<Square>,
    pub promotion: Option<PieceKind>,
    /// Rook origin when castling.
    pub secondary_origin: Option<Square>,
    /// Rook destination when castling.
    pub secondary_destination: Option<Square>,
    pub spec_text: String,
    pub is_check: bool,
    pub is_mate: bool,
    pub game_result: Option<GameResult>,
}

impl ChessMove {
    /// A plain move with no capture, promotion or castling and empty text.
    pub fn quiet(piece: Piece, origin: Square, destination: Square) -> Self {
        Self {
            piece,
            origin,
            destination,
            captured_piece: None,
            capture_square: None,
            promotion: None,
            secondary_origin: None,
            secondary_destination: None,
            spec_text: String::new(),
            is_check: false,
            is_mate: false,
            game_result: None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.secondary_origin.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.capture_square, Some(square) if square != self.destination)
    }

    #[inline]
    pub fn secondary(&self) -> Option<(Square, Square)> {
        self.secondary_origin.zip(self.secondary_destination)
    }

    /// Coordinate form such as `e7e8q`, independent of the original text.
    pub fn long_algebraic(&self) -> String {
        let mut out = format!("{}{}", self.origin, self.destination);
        if let Some(kind) = self.promotion {
            out.push(kind.letter().to_ascii_lowercase());
        }
        out
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spec_text.is_empty() {
            write!(f, "{}", self.long_algebraic())
        } else {
            write!(f, "{}", self.spec_text)
        }
    }
}
