//! Errors used throughout the rules engine.
//!
//! Each failure family has its own enum so callers can match on exactly the
//! failures an operation can produce:
//! - `FenError` for position text (FEN and piece-square shorthand). Always
//!   raised before any board is touched.
//! - `NotationError` for algebraic move text. Every variant carries the input
//!   text so a rejected move can be reported verbatim.
//! - `MoveError` for contract violations in `make_move`. Moves produced by the
//!   notation decoder never trigger these.
//!
//! Ordinary "nothing here" answers (an empty square, nothing to undo) are
//! `Option::None`, not errors.

use thiserror::Error;

use crate::game_state::chess_types::{CastleSide, Square};

/// Malformed position text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing field: {0:?}")]
    ExtraField(String),

    #[error("empty {0} field in FEN (fields must be separated by exactly one space)")]
    EmptyField(&'static str),

    #[error("board layout must contain {expected} ranks, found {found}")]
    WrongRankCount { expected: u8, found: usize },

    #[error("malformed rank {rank} ({text:?}): {reason}")]
    MalformedRank {
        rank: u8,
        text: String,
        reason: String,
    },

    #[error("illegal side-to-move token: {0:?}")]
    IllegalColor(String),

    #[error("illegal castling field {field:?}: unexpected {found:?}")]
    IllegalCastling { field: String, found: char },

    #[error("illegal en-passant token: {0:?}")]
    IllegalEnPassant(String),

    #[error("non-numeric {field}: {value:?}")]
    NonNumericClock { field: &'static str, value: String },

    #[error("malformed piece-square shorthand {text:?}: {reason}")]
    MalformedShorthand { text: String, reason: String },
}

/// Algebraic move text that could not be resolved against a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty move text")]
    Empty,

    #[error("{text:?}: unrecognized piece letter {letter:?}")]
    UnrecognizedPiece { text: String, letter: char },

    #[error("{text:?}: malformed destination square")]
    MalformedDestination { text: String },

    #[error("{text:?}: {reason}")]
    Malformed { text: String, reason: String },

    #[error("{text:?}: ambiguous origin, candidates {candidates:?}")]
    AmbiguousOrigin { text: String, candidates: Vec<Square> },

    #[error("{text:?}: no piece can legally make this move")]
    NoLegalOrigin { text: String },

    #[error("{text:?}: castling {side:?} is not allowed")]
    CastlingNotAllowed { text: String, side: CastleSide },

    #[error("{text:?}: {reason}")]
    InvalidPromotion { text: String, reason: String },

    #[error("{text:?}: annotation says {annotated} but the move gives {actual}")]
    AnnotationMismatch {
        text: String,
        annotated: &'static str,
        actual: &'static str,
    },
}

impl NotationError {
    /// The move text that was rejected, when there was any.
    pub fn text(&self) -> Option<&str> {
        match self {
            NotationError::Empty => None,
            NotationError::UnrecognizedPiece { text, .. }
            | NotationError::MalformedDestination { text }
            | NotationError::Malformed { text, .. }
            | NotationError::AmbiguousOrigin { text, .. }
            | NotationError::NoLegalOrigin { text }
            | NotationError::CastlingNotAllowed { text, .. }
            | NotationError::InvalidPromotion { text, .. }
            | NotationError::AnnotationMismatch { text, .. } => Some(text),
        }
    }
}

/// `make_move` called with a move that was not pre-validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    #[error("destination {destination} holds a piece of the same color as {origin}")]
    OwnPieceAtDestination { origin: Square, destination: Square },

    #[error("illegal castling from {origin} to {destination}")]
    IllegalCastling { origin: Square, destination: Square },

    #[error("square {0} is off the board")]
    SquareOffBoard(Square),
}

/// A move played on a `Game` was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("{text:?}: {source}")]
    Move {
        text: String,
        #[source]
        source: MoveError,
    },
}

/// PGN text that could not be read or replayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgnError {
    #[error("invalid PGN header line: {0:?}")]
    InvalidHeader(String),

    #[error("invalid FEN header: {0}")]
    Fen(#[from] FenError),

    #[error("move {ply}: {source}")]
    Replay {
        ply: usize,
        #[source]
        source: GameError,
    },
}
