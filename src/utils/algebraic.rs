//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by the FEN, notation and shorthand parsers. Ranks may have
//! more than one digit on tall boards.

use crate::game_state::chess_types::{BoardDims, Square};

/// Parse `"e4"` style text without any board bounds check.
pub fn algebraic_to_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let file_char = chars.next()?;
    if !file_char.is_ascii_lowercase() {
        return None;
    }

    let rank_text = chars.as_str();
    if rank_text.is_empty()
        || rank_text.starts_with('0')
        || !rank_text.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let rank = rank_text.parse::<u8>().ok()?;
    if rank == 0 {
        return None;
    }

    let file = file_char as u8 - b'a' + 1;
    Some(Square::new(file, rank))
}

/// Parse a square and require it to lie on a board of `dims`.
pub fn algebraic_to_square_on(text: &str, dims: BoardDims) -> Option<Square> {
    algebraic_to_square(text).filter(|square| dims.contains(*square))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Map a file letter to its 1-based file number.
#[inline]
pub fn file_from_char(ch: char, dims: BoardDims) -> Option<u8> {
    if !ch.is_ascii_lowercase() {
        return None;
    }
    let file = ch as u8 - b'a' + 1;
    (file <= dims.files).then_some(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((a1.file(), a1.rank()), (1, 1));
        assert_eq!((h8.file(), h8.rank()), (8, 8));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(Square::new(5, 4)), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "4e", "E4", "e0", "e03", "e-1", "e4x"] {
            assert_eq!(algebraic_to_square(bad), None, "{bad} should not parse");
        }
        assert_eq!(algebraic_to_square_on("i1", BoardDims::default()), None);
        assert_eq!(algebraic_to_square_on("e9", BoardDims::default()), None);
    }

    #[test]
    fn multi_digit_ranks_parse_on_tall_boards() {
        let dims = BoardDims::new(10, 12).expect("valid dims");
        let square = algebraic_to_square_on("j12", dims).expect("j12 is on a 10x12 board");
        assert_eq!((square.file(), square.rank()), (10, 12));
        assert_eq!(square.to_string(), "j12");
        assert_eq!(file_from_char('j', dims), Some(10));
        assert_eq!(file_from_char('k', dims), None);
    }
}
