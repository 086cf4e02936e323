//! FEN-to-Board parser.
//!
//! Builds a fully-populated `Board` from a Forsyth-Edwards Notation string.
//! Parsing always targets a fresh scratch board, so a malformed string can
//! never leave a caller's board half-updated.

use crate::errors::FenError;
use crate::game_state::chess_rules::FEN_PREFIX;
use crate::game_state::{board::Board, chess_types::*};
use crate::utils::algebraic::algebraic_to_square_on;

const FIELD_NAMES: [&str; 6] = [
    "board layout",
    "side-to-move",
    "castling rights",
    "en-passant square",
    "halfmove clock",
    "fullmove number",
];

#[inline]
pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    parse_fen_with_dims(fen, BoardDims::default())
}

pub fn parse_fen_with_dims(fen: &str, dims: BoardDims) -> Result<Board, FenError> {
    let fen = fen.trim();
    let fen = fen.strip_prefix(FEN_PREFIX).unwrap_or(fen);

    let mut parts = fen.split(' ');
    let mut fields = [""; 6];
    for (slot, name) in fields.iter_mut().zip(FIELD_NAMES) {
        let field = parts.next().ok_or(FenError::MissingField(name))?;
        if field.is_empty() {
            return Err(FenError::EmptyField(name));
        }
        *slot = field;
    }
    if let Some(extra) = parts.next() {
        return Err(FenError::ExtraField(extra.to_owned()));
    }
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields;

    let mut board = Board::empty(dims);

    parse_board(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_target = parse_en_passant_square(en_passant_part, dims)?;
    board.half_move_clock = parse_clock(halfmove_part, "halfmove clock")?;
    board.full_move_clock = parse_clock(fullmove_part, "fullmove number")?;

    Ok(board)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), FenError> {
    let dims = board.dims;
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != dims.ranks as usize {
        return Err(FenError::WrongRankCount {
            expected: dims.ranks,
            found: ranks.len(),
        });
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = dims.ranks - fen_rank_idx as u8;
        let malformed = |reason: String| FenError::MalformedRank {
            rank,
            text: (*rank_str).to_owned(),
            reason,
        };

        let mut file = 0u32;
        let mut chars = rank_str.chars().peekable();
        while let Some(ch) = chars.next() {
            if let Some(first) = ch.to_digit(10) {
                if first == 0 {
                    return Err(malformed("empty-square count must be positive".to_owned()));
                }
                let mut run = first;
                while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                    run = run.saturating_mul(10).saturating_add(next);
                    chars.next();
                }
                file += run;
                if file > u32::from(dims.files) {
                    return Err(malformed(format!("more than {} files", dims.files)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| malformed(format!("invalid piece character '{ch}'")))?;

            file += 1;
            if file > u32::from(dims.files) {
                return Err(malformed(format!("more than {} files", dims.files)));
            }
            board.set_square(Square::new(file as u8, rank), Some(piece));
        }

        if file != u32::from(dims.files) {
            return Err(malformed(format!(
                "covers {file} files instead of {}",
                dims.files
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::IllegalColor(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    const CANONICAL: [(char, CastlingRights); 4] = [
        ('K', CASTLE_WHITE_KINGSIDE),
        ('Q', CASTLE_WHITE_QUEENSIDE),
        ('k', CASTLE_BLACK_KINGSIDE),
        ('q', CASTLE_BLACK_QUEENSIDE),
    ];

    let mut rights: CastlingRights = 0;
    let mut next_allowed = 0usize;

    for ch in castling_part.chars() {
        let position = CANONICAL[next_allowed..]
            .iter()
            .position(|(letter, _)| *letter == ch)
            .map(|offset| next_allowed + offset)
            .ok_or_else(|| FenError::IllegalCastling {
                field: castling_part.to_owned(),
                found: ch,
            })?;
        rights |= CANONICAL[position].1;
        next_allowed = position + 1;
    }

    Ok(rights)
}

fn parse_en_passant_square(
    en_passant_part: &str,
    dims: BoardDims,
) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square_on(en_passant_part, dims)
        .map(Some)
        .ok_or_else(|| FenError::IllegalEnPassant(en_passant_part.to_owned()))
}

fn parse_clock(text: &str, field: &'static str) -> Result<u32, FenError> {
    let non_numeric = || FenError::NonNumericClock {
        field,
        value: text.to_owned(),
    };
    if !text.bytes().all(|b| b.is_ascii_digit()) || (text.len() > 1 && text.starts_with('0')) {
        return Err(non_numeric());
    }
    text.parse::<u32>().map_err(|_| non_numeric())
}
