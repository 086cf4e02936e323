//! Value types shared by every rules component.
//!
//! Squares, pieces, colors and board dimensions are small `Copy` values. The
//! single-letter piece encoding (uppercase = white) only appears at text
//! boundaries; internally a piece is always a typed (kind, color) pair.

use std::fmt;
use std::str::FromStr;

pub use crate::game_state::board::Board;
pub use crate::game_state::save_unit::SaveUnit;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Uppercase letter used by FEN and algebraic notation.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Decode a FEN letter: uppercase is white, lowercase is black.
    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        PieceKind::from_letter(ch).map(|kind| Self { kind, color })
    }

    pub fn fen_char(self) -> char {
        let upper = self.kind.letter();
        match self.color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// Board geometry. Files are lettered, so at most 26 of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDims {
    pub files: u8,
    pub ranks: u8,
}

impl Default for BoardDims {
    fn default() -> Self {
        Self { files: 8, ranks: 8 }
    }
}

impl BoardDims {
    pub const MAX_EXTENT: u8 = 26;

    pub fn new(files: u8, ranks: u8) -> Option<Self> {
        let valid = |n: u8| (1..=Self::MAX_EXTENT).contains(&n);
        if valid(files) && valid(ranks) {
            Some(Self { files, ranks })
        } else {
            None
        }
    }

    #[inline]
    pub const fn square_count(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    #[inline]
    pub fn contains(self, square: Square) -> bool {
        (1..=self.files).contains(&square.file) && (1..=self.ranks).contains(&square.rank)
    }

    /// Flat index of an on-board square, `a1 == 0`, files varying fastest.
    #[inline]
    pub fn index_of(self, square: Square) -> Option<usize> {
        if !self.contains(square) {
            return None;
        }
        Some((square.rank as usize - 1) * self.files as usize + (square.file as usize - 1))
    }

    #[inline]
    pub fn square_at(self, index: usize) -> Option<Square> {
        if index >= self.square_count() {
            return None;
        }
        let files = self.files as usize;
        Some(Square {
            file: (index % files) as u8 + 1,
            rank: (index / files) as u8 + 1,
        })
    }

    /// Every square, rank 1 first.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.square_count()).filter_map(move |index| self.square_at(index))
    }
}

/// A (file, rank) pair, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_char(self) -> char {
        char::from(b'a' + self.file.saturating_sub(1))
    }

    /// Step by `(d_file, d_rank)`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8, dims: BoardDims) -> Option<Self> {
        let file = i16::from(self.file) + i16::from(d_file);
        let rank = i16::from(self.rank) + i16::from(d_rank);
        if file < 1 || rank < 1 || file > i16::from(dims.files) || rank > i16::from(dims.ranks) {
            return None;
        }
        Some(Self {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank)
    }
}

impl FromStr for Square {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::utils::algebraic::algebraic_to_square(text)
            .ok_or_else(|| format!("invalid algebraic square: {text}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// Castling rights bitmask, one bit per color and side.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castle_flag(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Game outcome token as written after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Undecided,
}

impl GameResult {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Undecided),
            _ => None,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Undecided => "*",
        }
    }
}
