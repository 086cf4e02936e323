use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::en_passant_capture_square;

/// One square's contents and moved flag as they were before a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSquare {
    pub square: Square,
    pub occupant: Option<Piece>,
    pub moved: bool,
}

impl SavedSquare {
    fn capture(board: &Board, square: Square) -> Self {
        Self {
            square,
            occupant: board.get_piece(square),
            moved: board.has_moved(square),
        }
    }

    fn restore(&self, board: &mut Board) {
        board.set_square(self.square, self.occupant);
        board.set_moved(self.square, self.moved);
    }
}

/// Everything `make_move` is about to overwrite, taken just before the move.
///
/// Restoring a unit onto the board the move produced gives back the exact
/// prior position, including moved flags and clocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveUnit {
    pub origin: SavedSquare,
    pub destination: SavedSquare,
    /// Rook origin and destination when castling.
    pub secondary: Option<(SavedSquare, SavedSquare)>,
    pub en_passant_victim: Option<SavedSquare>,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub half_move_clock: u32,
    pub full_move_clock: u32,
}

impl SaveUnit {
    pub fn capture(
        board: &Board,
        origin: Square,
        destination: Square,
        secondary: Option<(Square, Square)>,
    ) -> Self {
        let en_passant_victim = board
            .get_piece(origin)
            .filter(|_| board.get_piece(destination).is_none())
            .and_then(|piece| en_passant_capture_square(board, piece, origin, destination))
            .map(|square| SavedSquare::capture(board, square));

        Self {
            origin: SavedSquare::capture(board, origin),
            destination: SavedSquare::capture(board, destination),
            secondary: secondary.map(|(rook_origin, rook_destination)| {
                (
                    SavedSquare::capture(board, rook_origin),
                    SavedSquare::capture(board, rook_destination),
                )
            }),
            en_passant_victim,
            side_to_move: board.side_to_move,
            castling_rights: board.castling_rights,
            en_passant_target: board.en_passant_target,
            half_move_clock: board.half_move_clock,
            full_move_clock: board.full_move_clock,
        }
    }

    /// Put every saved square and scalar back, in reverse capture order.
    pub fn restore(&self, board: &mut Board) {
        if let Some((rook_origin, rook_destination)) = &self.secondary {
            rook_destination.restore(board);
            rook_origin.restore(board);
        }
        if let Some(victim) = &self.en_passant_victim {
            victim.restore(board);
        }
        self.destination.restore(board);
        self.origin.restore(board);

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.half_move_clock = self.half_move_clock;
        board.full_move_clock = self.full_move_clock;
    }
}
