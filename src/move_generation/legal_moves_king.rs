//! Castling eligibility.
//!
//! Castling is legal for a side only when all four conditions hold:
//! king and rook stand on their home squares, the right is still held and
//! neither piece has ever moved, every square strictly between them is empty,
//! and no square the king stands on or crosses is attacked.

use crate::game_state::chess_rules::{castling_plan, CastlingPlan};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::attacked_by;

const CASTLE_SIDES: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

pub fn can_castle(board: &Board, side: CastleSide, color: Color) -> bool {
    let Some(plan) = castling_plan(board.dims, color, side) else {
        return false;
    };

    let king = Piece::new(PieceKind::King, color);
    let rook = Piece::new(PieceKind::Rook, color);
    if board.get_piece(plan.king_origin) != Some(king)
        || board.get_piece(plan.rook_origin) != Some(rook)
    {
        return false;
    }

    if !board.has_castling_right(color, side)
        || board.has_moved(plan.king_origin)
        || board.has_moved(plan.rook_origin)
    {
        return false;
    }

    if plan
        .between()
        .into_iter()
        .any(|square| board.get_piece(square).is_some())
    {
        return false;
    }

    let enemy = color.opposite();
    !plan
        .king_path()
        .into_iter()
        .any(|square| attacked_by(board, square, enemy))
}

/// King destinations reachable by castling from `king_from`.
pub fn castling_destinations(board: &Board, color: Color, king_from: Square) -> Vec<Square> {
    CASTLE_SIDES
        .into_iter()
        .filter_map(|side| castling_plan(board.dims, color, side).map(|plan| (side, plan)))
        .filter(|(side, plan)| plan.king_origin == king_from && can_castle(board, *side, color))
        .map(|(_, plan)| plan.king_destination)
        .collect()
}

/// The castling plan a king move from `origin` to `destination` corresponds to, if any.
pub fn castling_plan_for(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
) -> Option<(CastleSide, CastlingPlan)> {
    if piece.kind != PieceKind::King {
        return None;
    }
    CASTLE_SIDES.into_iter().find_map(|side| {
        castling_plan(board.dims, piece.color, side)
            .filter(|plan| plan.king_origin == origin && plan.king_destination == destination)
            .map(|plan| (side, plan))
    })
}

/// Rook relocation accompanying a castling king move.
#[inline]
pub fn castling_secondary(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
) -> Option<(Square, Square)> {
    castling_plan_for(board, piece, origin, destination)
        .map(|(_, plan)| (plan.rook_origin, plan.rook_destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    const OPEN_CASTLES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn both_sides_castle_on_open_board() {
        let board = Board::from_fen(OPEN_CASTLES).expect("FEN parses");
        for color in [Color::White, Color::Black] {
            assert!(can_castle(&board, CastleSide::KingSide, color));
            assert!(can_castle(&board, CastleSide::QueenSide, color));
        }
        assert_eq!(
            castling_destinations(&board, Color::White, sq("e1")),
            vec![sq("g1"), sq("c1")]
        );
    }

    #[test]
    fn interposed_piece_blocks_until_removed() {
        let mut board = Board::from_fen(OPEN_CASTLES).expect("FEN parses");
        let knight = Piece::new(PieceKind::Knight, Color::White);

        for between in ["b1", "c1", "d1"] {
            board.place_piece(knight, sq(between)).expect("on board");
            assert!(!can_castle(&board, CastleSide::QueenSide, Color::White), "{between}");
            assert!(can_castle(&board, CastleSide::KingSide, Color::White));
            board.remove_piece(sq(between));
            assert!(can_castle(&board, CastleSide::QueenSide, Color::White));
        }

        let enemy_bishop = Piece::new(PieceKind::Bishop, Color::Black);
        board.place_piece(enemy_bishop, sq("f1")).expect("on board");
        assert!(!can_castle(&board, CastleSide::KingSide, Color::White));
        board.remove_piece(sq("f1"));
        assert!(can_castle(&board, CastleSide::KingSide, Color::White));
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // Black rook on f8 covers f1, which the king crosses.
        let board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN parses");
        assert!(!can_castle(&board, CastleSide::KingSide, Color::White));
        assert!(can_castle(&board, CastleSide::QueenSide, Color::White));

        // Attacked destination.
        let board = Board::from_fen("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN parses");
        assert!(!can_castle(&board, CastleSide::QueenSide, Color::White));
        assert!(can_castle(&board, CastleSide::KingSide, Color::White));

        // King in check.
        let board = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN parses");
        assert!(!can_castle(&board, CastleSide::KingSide, Color::White));
        assert!(!can_castle(&board, CastleSide::QueenSide, Color::White));
    }

    #[test]
    fn attacked_b_file_square_does_not_block_long_castle() {
        let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN parses");
        assert!(can_castle(&board, CastleSide::QueenSide, Color::White));
    }

    #[test]
    fn moved_or_missing_pieces_and_rights_block_castling() {
        let no_rights = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN parses");
        assert!(!can_castle(&no_rights, CastleSide::KingSide, Color::White));

        let mut board = Board::from_fen(OPEN_CASTLES).expect("FEN parses");
        board.make_move(sq("h1"), sq("h2"), None, None).expect("rook move");
        board.make_move(sq("a8"), sq("a7"), None, None).expect("rook move");
        board.make_move(sq("h2"), sq("h1"), None, None).expect("rook back");
        assert!(!can_castle(&board, CastleSide::KingSide, Color::White));
        assert!(can_castle(&board, CastleSide::QueenSide, Color::White));
        assert!(!can_castle(&board, CastleSide::QueenSide, Color::Black));
        assert!(can_castle(&board, CastleSide::KingSide, Color::Black));
    }

    #[test]
    fn castling_secondary_maps_king_step_to_rook_step() {
        let board = Board::from_fen(OPEN_CASTLES).expect("FEN parses");
        let king = Piece::new(PieceKind::King, Color::Black);
        assert_eq!(
            castling_secondary(&board, king, sq("e8"), sq("c8")),
            Some((sq("a8"), sq("d8")))
        );
        assert_eq!(castling_secondary(&board, king, sq("e8"), sq("d8")), None);
    }
}
