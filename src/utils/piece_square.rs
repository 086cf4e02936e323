//! Piece-square shorthand for test and setup positions.
//!
//! `:Kc1Qe1kh7 w` places a white king on c1, a white queen on e1 and a black
//! king on h7 with white to move. Positions built this way carry no castling
//! rights or en-passant target and start with clocks `0 1`.

use crate::errors::FenError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square_on;

pub fn parse_piece_square(text: &str, dims: BoardDims) -> Result<Board, FenError> {
    let malformed = |reason: String| FenError::MalformedShorthand {
        text: text.to_owned(),
        reason,
    };

    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix(':')
        .ok_or_else(|| malformed("must start with ':'".to_owned()))?;

    let mut fields = body.split_whitespace();
    let placement = fields.next().unwrap_or_default();
    let side = match fields.next() {
        Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::IllegalColor(other.to_owned())),
        None => return Err(FenError::MissingField("side to move")),
    };
    if let Some(extra) = fields.next() {
        return Err(FenError::ExtraField(extra.to_owned()));
    }

    let mut board = Board::empty(dims);
    board.side_to_move = side;

    let mut chars = placement.char_indices().peekable();
    while let Some((start, letter)) = chars.next() {
        let piece = Piece::from_fen_char(letter)
            .ok_or_else(|| malformed(format!("expected a piece letter at {letter:?}")))?;

        let square_start = start + letter.len_utf8();
        let mut square_end = square_start;
        if let Some((_, file)) = chars.next_if(|(_, ch)| ch.is_ascii_lowercase()) {
            square_end += file.len_utf8();
        }
        while let Some((_, digit)) = chars.next_if(|(_, ch)| ch.is_ascii_digit()) {
            square_end += digit.len_utf8();
        }

        let square_text = &placement[square_start..square_end];
        let square = algebraic_to_square_on(square_text, dims)
            .ok_or_else(|| malformed(format!("bad square {square_text:?} for {letter}")))?;
        if board.get_piece(square).is_some() {
            return Err(malformed(format!("square {square} is given twice")));
        }
        board.set_square(square, Some(piece));
    }

    if board.get_pieces().is_empty() {
        return Err(malformed("no pieces given".to_owned()));
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn parses_shorthand_position() {
        let board = parse_piece_square(":Kc1Qe1kh7 w", BoardDims::default()).expect("parses");
        assert_eq!(board.to_fen_string(), "8/7k/8/8/8/8/8/2K1Q3 w - - 0 1");
        assert_eq!(
            board.get_piece(sq("e1")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );

        let black = parse_piece_square(":ka8Pb7 b", BoardDims::default()).expect("parses");
        assert_eq!(black.side_to_move(), Color::Black);
        assert_eq!(black.get_pieces().len(), 2);
    }

    #[test]
    fn rejects_malformed_shorthand() {
        let dims = BoardDims::default();
        for bad in ["Kc1 w", ":Kc9 w", ":Xc1 w", ":Kc1Qc1 w", ":K w"] {
            assert!(
                matches!(
                    parse_piece_square(bad, dims),
                    Err(FenError::MalformedShorthand { .. })
                ),
                "{bad}"
            );
        }
        assert_eq!(
            parse_piece_square(":Kc1", dims),
            Err(FenError::MissingField("side to move"))
        );
        assert_eq!(
            parse_piece_square(":Kc1 x", dims),
            Err(FenError::IllegalColor("x".to_owned()))
        );
    }
}
