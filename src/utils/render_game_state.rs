//! Terminal-oriented Unicode board renderer.
//!
//! Draws any board width with file letters above and below and rank numbers
//! on both sides. Used by `Board`'s `Display` and the command-line driver.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string, top rank first.
pub fn render_board(board: &Board) -> String {
    let dims = board.dims();
    let rank_width = dims.ranks.to_string().len();
    let mut out = String::new();

    let file_row = file_letters(dims, rank_width);
    out.push_str(&file_row);
    out.push('\n');

    for rank in (1..=dims.ranks).rev() {
        out.push_str(&format!("{rank:>rank_width$} "));

        let cells: Vec<String> = (1..=dims.files)
            .map(|file| match board.get_piece(Square::new(file, rank)) {
                Some(piece) => piece_to_unicode(piece).to_string(),
                None => "·".to_owned(),
            })
            .collect();
        out.push_str(&cells.join(" "));

        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(&file_row);
    out
}

fn file_letters(dims: BoardDims, rank_width: usize) -> String {
    let letters: Vec<String> = (1..=dims.files)
        .map(|file| Square::new(file, 1).file_char().to_string())
        .collect();
    format!("{:rank_width$} {}", "", letters.join(" "))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
