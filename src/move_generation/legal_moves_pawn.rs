//! Pawn special cases: the home-rank double step and en passant.

use crate::game_state::chess_rules::{pawn_home_rank, promotion_rank};
use crate::game_state::{board::Board, chess_types::*};

/// Two-square push target, if the pawn is on its home rank with both squares empty.
pub fn double_step_destination(board: &Board, piece: Piece, origin: Square) -> Option<Square> {
    if piece.kind != PieceKind::Pawn || origin.rank() != pawn_home_rank(board.dims, piece.color) {
        return None;
    }

    let forward = piece.color.forward();
    let one_step = origin.offset(0, forward, board.dims)?;
    let two_step = one_step.offset(0, forward, board.dims)?;
    if board.get_piece(one_step).is_some() || board.get_piece(two_step).is_some() {
        return None;
    }
    Some(two_step)
}

#[inline]
pub fn is_double_step(piece: Piece, origin: Square, destination: Square) -> bool {
    piece.kind == PieceKind::Pawn
        && origin.file() == destination.file()
        && origin.rank().abs_diff(destination.rank()) == 2
}

/// Square behind a pushed pawn that becomes the en-passant target.
#[inline]
pub fn skipped_square(piece: Piece, origin: Square, dims: BoardDims) -> Option<Square> {
    origin.offset(0, piece.color.forward(), dims)
}

/// Where the captured pawn stands when `piece` moves onto the en-passant target.
///
/// Purely positional: the square one rank behind the destination on the
/// mover's approach side. Whether an enemy pawn is actually there is checked
/// by [`en_passant_victim`].
pub fn en_passant_capture_square(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
) -> Option<Square> {
    if piece.kind != PieceKind::Pawn
        || board.en_passant_target != Some(destination)
        || origin.file() == destination.file()
    {
        return None;
    }
    destination.offset(0, -piece.color.forward(), board.dims)
}

/// En-passant capture square holding an enemy pawn, when the move is a valid en-passant capture.
pub fn en_passant_victim(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
) -> Option<Square> {
    if piece.color != board.side_to_move {
        return None;
    }
    let square = en_passant_capture_square(board, piece, origin, destination)?;
    let enemy_pawn = Piece::new(PieceKind::Pawn, piece.color.opposite());
    (board.get_piece(square) == Some(enemy_pawn)).then_some(square)
}

#[inline]
pub fn reaches_promotion_rank(board: &Board, piece: Piece, destination: Square) -> bool {
    piece.kind == PieceKind::Pawn && destination.rank() == promotion_rank(board.dims, piece.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn double_step_needs_home_rank_and_clear_path() {
        let board = Board::from_fen("8/8/8/8/8/4n3/3P1P1P/8 w - - 0 1").expect("FEN parses");
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(double_step_destination(&board, pawn, sq("d2")), Some(sq("d4")));
        assert_eq!(double_step_destination(&board, pawn, sq("f2")), Some(sq("f4")));
        assert_eq!(double_step_destination(&board, pawn, sq("h3")), None);

        let blocked = Board::from_fen("8/8/8/8/3n4/8/3P4/8 w - - 0 1").expect("FEN parses");
        assert_eq!(double_step_destination(&blocked, pawn, sq("d2")), None);
    }

    #[test]
    fn en_passant_victim_requires_enemy_pawn_behind_target() {
        let board = Board::from_fen("8/8/8/3pP3/8/8/8/K6k w - d6 0 2").expect("FEN parses");
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(en_passant_victim(&board, pawn, sq("e5"), sq("d6")), Some(sq("d5")));
        assert_eq!(en_passant_victim(&board, pawn, sq("e5"), sq("e6")), None);

        let no_pawn = Board::from_fen("8/8/8/4P3/8/8/8/K6k w - d6 0 2").expect("FEN parses");
        assert_eq!(en_passant_victim(&no_pawn, pawn, sq("e5"), sq("d6")), None);
        assert_eq!(
            en_passant_capture_square(&no_pawn, pawn, sq("e5"), sq("d6")),
            Some(sq("d5"))
        );
    }
}
