//! Canonical mutable position.
//!
//! `Board` stores placement in a flat array indexed by square, so `clone()` is
//! a bounded copy of two small vectors plus scalars. The movement engine relies
//! on that to test candidate moves on a throwaway copy.

use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{FenError, MoveError};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen_with_dims;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) dims: BoardDims,
    pub(crate) squares: Vec<Option<Piece>>,
    /// Per square: has the piece that started there ever left it.
    pub(crate) moved: Vec<bool>,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) half_move_clock: u32,
    pub(crate) full_move_clock: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(BoardDims::default())
    }
}

impl Board {
    /// Empty board, white to move, no rights, clocks `0 1`.
    pub fn empty(dims: BoardDims) -> Self {
        Self {
            dims,
            squares: vec![None; dims.square_count()],
            moved: vec![false; dims.square_count()],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_clock: 1,
        }
    }

    /// Standard starting position on an 8x8 board.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty(BoardDims::default());
        for (file, kind) in (1u8..).zip(BACK_RANK) {
            for (color, back, pawns) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
                board.set_square(Square::new(file, back), Some(Piece::new(kind, color)));
                board.set_square(
                    Square::new(file, pawns),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board.castling_rights = CASTLE_ALL;
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen_with_dims(fen, BoardDims::default())
    }

    /// Replace this position with `fen`. On error the board is untouched.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parsed = parse_fen_with_dims(fen, self.dims)?;
        *self = parsed;
        Ok(())
    }

    #[inline]
    pub fn to_fen_string(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & castle_flag(color, side) != 0
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }

    #[inline]
    pub fn full_move_clock(&self) -> u32 {
        self.full_move_clock
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.dims
            .index_of(square)
            .and_then(|index| self.squares[index])
    }

    /// Put `piece` on `square`, returning whatever was there.
    pub fn place_piece(&mut self, piece: Piece, square: Square) -> Result<Option<Piece>, MoveError> {
        let index = self.index(square)?;
        Ok(self.squares[index].replace(piece))
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let index = self.dims.index_of(square)?;
        self.squares[index].take()
    }

    /// Every occupied square in index order (a1, b1, ..., h8).
    pub fn get_pieces(&self) -> Vec<(Piece, Square)> {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let piece = (*slot)?;
                let square = self.dims.square_at(index)?;
                Some((piece, square))
            })
            .collect()
    }

    /// Whether the piece that started on `square` has ever moved away.
    #[inline]
    pub fn has_moved(&self, square: Square) -> bool {
        self.dims
            .index_of(square)
            .map(|index| self.moved[index])
            .unwrap_or(false)
    }

    pub fn make_move(
        &mut self,
        origin: Square,
        destination: Square,
        promotion: Option<PieceKind>,
        secondary: Option<(Square, Square)>,
    ) -> Result<(), MoveError> {
        legal_move_apply::make_move(self, origin, destination, promotion, secondary)
    }

    /// Apply a decoded move, returning the unit needed to take it back.
    pub fn apply_move(&mut self, chess_move: &ChessMove) -> Result<SaveUnit, MoveError> {
        legal_move_apply::apply_chess_move(self, chess_move)
    }

    pub fn pseudo_legal_destinations(&self, piece: Piece, origin: Square) -> BTreeSet<Square> {
        legal_move_generator::pseudo_legal_destinations(self, piece, origin)
    }

    pub fn legal_destinations(&self, piece: Piece, origin: Square) -> BTreeSet<Square> {
        legal_move_generator::legal_destinations(self, piece, origin)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    #[inline]
    pub(crate) fn index(&self, square: Square) -> Result<usize, MoveError> {
        self.dims
            .index_of(square)
            .ok_or(MoveError::SquareOffBoard(square))
    }

    #[inline]
    pub(crate) fn set_moved(&mut self, square: Square, moved: bool) {
        if let Some(index) = self.dims.index_of(square) {
            self.moved[index] = moved;
        }
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square, occupant: Option<Piece>) {
        if let Some(index) = self.dims.index_of(square) {
            self.squares[index] = occupant;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn new_game_has_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.get_pieces().len(), 32);
        assert_eq!(
            board.get_piece(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(board.get_piece(sq("e4")), None);
        assert_eq!(board.to_fen_string(), STARTING_POSITION_FEN);
        assert_eq!(Board::from_fen(STARTING_POSITION_FEN), Ok(board));
    }

    #[test]
    fn place_piece_returns_displaced_occupant() {
        let mut board = Board::default();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let rook = Piece::new(PieceKind::Rook, Color::Black);

        assert_eq!(board.place_piece(knight, sq("d4")), Ok(None));
        assert_eq!(board.place_piece(rook, sq("d4")), Ok(Some(knight)));
        assert_eq!(board.remove_piece(sq("d4")), Some(rook));
        assert_eq!(board.remove_piece(sq("d4")), None);
        assert_eq!(
            board.place_piece(knight, Square::new(9, 1)),
            Err(MoveError::SquareOffBoard(Square::new(9, 1)))
        );
    }

    #[test]
    fn load_fen_failure_leaves_board_untouched() {
        let mut board = Board::new_game();
        let before = board.clone();

        let err = board
            .load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1")
            .expect_err("bad side token should fail");
        assert_eq!(err, FenError::IllegalColor("x".to_owned()));
        assert_eq!(board, before);

        board
            .load_fen("8/8/8/8/8/8/8/K6k b - - 3 40")
            .expect("valid FEN should load");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.get_pieces().len(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::new_game();
        let mut copy = board.clone();
        copy.make_move(sq("e2"), sq("e4"), None, None)
            .expect("e2e4 applies");

        assert_ne!(copy, board);
        assert!(board.get_piece(sq("e2")).is_some());
        assert!(copy.get_piece(sq("e2")).is_none());
        assert!(!board.has_moved(sq("e2")));
        assert!(copy.has_moved(sq("e2")));
    }
}
