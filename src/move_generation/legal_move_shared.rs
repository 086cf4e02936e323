use crate::game_state::{board::Board, chess_types::*};

/// Every piece of `color` with its square, in board index order.
#[inline]
pub fn pieces_of_color(board: &Board, color: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
    board
        .squares
        .iter()
        .enumerate()
        .filter_map(move |(index, slot)| match slot {
            Some(piece) if piece.color == color => {
                board.dims.square_at(index).map(|square| (*piece, square))
            }
            _ => None,
        })
}

/// Squares currently holding exactly `piece`.
#[inline]
pub fn squares_holding(board: &Board, piece: Piece) -> Vec<Square> {
    pieces_of_color(board, piece.color)
        .filter(|(candidate, _)| *candidate == piece)
        .map(|(_, square)| square)
        .collect()
}
