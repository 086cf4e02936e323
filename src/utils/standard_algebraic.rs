//! Standard algebraic notation (SAN) decoding and encoding.
//!
//! Decoding resolves move text against a board without mutating it: the
//! piece letter, optional disambiguators and destination select candidate
//! origins, and each candidate must have the destination among its legal
//! destinations. The result is a fully resolved `ChessMove` for the caller to
//! apply. Long coordinate forms such as `Ng1-f3` or `e2e4` parse as fully
//! disambiguated SAN.

use crate::errors::NotationError;
use crate::game_state::chess_rules::castling_plan;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::build_move_for;
use crate::move_generation::legal_move_generator::{classify_check, legal_destinations};
use crate::move_generation::legal_move_shared::squares_holding;
use crate::move_generation::legal_moves_king::can_castle;
use crate::move_generation::legal_moves_pawn::reaches_promotion_rank;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_descriptions::PROMOTION_KINDS;
use crate::utils::algebraic::{algebraic_to_square_on, file_from_char};

/// Decoder behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotationConfig {
    /// Piece a pawn promotes to when the text names none.
    pub default_promotion: PieceKind,
    /// Reject moves whose `+`/`#` annotation disagrees with the position
    /// instead of only logging a warning.
    pub strict_annotations: bool,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
            strict_annotations: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Annotation {
    Check,
    Mate,
}

/// Move text with the decorations stripped off.
#[derive(Debug, Clone, Copy)]
struct MoveText {
    kind: PieceKind,
    from_file: Option<u8>,
    from_rank: Option<u8>,
    capture: bool,
    destination: Square,
    promotion: Option<PieceKind>,
}

#[inline]
pub fn decode(text: &str, board: &Board) -> Result<ChessMove, NotationError> {
    decode_with_config(text, board, &NotationConfig::default())
}

pub fn decode_with_config(
    text: &str,
    board: &Board,
    config: &NotationConfig,
) -> Result<ChessMove, NotationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NotationError::Empty);
    }
    if !trimmed.is_ascii() {
        return Err(malformed(trimmed, "move text must be ASCII"));
    }

    let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let game_result = match tokens.last().and_then(|token| GameResult::from_token(token)) {
        Some(result) if tokens.len() > 1 => {
            tokens.pop();
            Some(result)
        }
        _ => None,
    };

    let mut en_passant_suffix = false;
    if tokens.len() > 1 && tokens.last() == Some(&"e.p.") {
        tokens.pop();
        en_passant_suffix = true;
    }
    let [token] = tokens.as_slice() else {
        return Err(malformed(trimmed, "expected a single move"));
    };
    let token = *token;
    let token = match token.strip_suffix("e.p.") {
        Some(head) if !head.is_empty() => {
            en_passant_suffix = true;
            head
        }
        _ => token,
    };

    let (body, annotation) = strip_annotations(token);
    if body.is_empty() {
        return Err(malformed(trimmed, "no move before annotations"));
    }

    let mut chess_move = match castling_side(body) {
        Some(side) => decode_castling(trimmed, board, side)?,
        None => {
            let parsed = parse_move_text(trimmed, body, board.dims())?;
            resolve(trimmed, board, &parsed, config)?
        }
    };

    if en_passant_suffix && !chess_move.is_en_passant() {
        return Err(malformed(trimmed, "e.p. suffix on a move that is not en passant"));
    }

    let (is_check, is_mate) = classify_check(board, &chess_move);
    chess_move.is_check = is_check;
    chess_move.is_mate = is_mate;
    chess_move.game_result = game_result;
    chess_move.spec_text = token.to_owned();

    check_annotation(trimmed, annotation, is_check, is_mate, config)?;
    Ok(chess_move)
}

fn malformed(text: &str, reason: &str) -> NotationError {
    NotationError::Malformed {
        text: text.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Split off `+`/`#` and `!`/`?` glyphs in any order.
fn strip_annotations(token: &str) -> (&str, Option<Annotation>) {
    let mut body = token;
    let mut annotation = None;
    loop {
        let stripped = body.trim_end_matches(['!', '?']);
        if let Some(head) = stripped.strip_suffix('#') {
            annotation = Some(Annotation::Mate);
            body = head;
        } else if let Some(head) = stripped.strip_suffix('+') {
            if annotation.is_none() {
                annotation = Some(Annotation::Check);
            }
            body = head;
        } else {
            return (stripped, annotation);
        }
    }
}

fn castling_side(body: &str) -> Option<CastleSide> {
    match body {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    }
}

fn decode_castling(text: &str, board: &Board, side: CastleSide) -> Result<ChessMove, NotationError> {
    let color = board.side_to_move();
    let not_allowed = || NotationError::CastlingNotAllowed {
        text: text.to_owned(),
        side,
    };

    let plan = castling_plan(board.dims(), color, side).ok_or_else(not_allowed)?;
    if !can_castle(board, side, color) {
        return Err(not_allowed());
    }

    let king = Piece::new(PieceKind::King, color);
    Ok(build_move_for(
        board,
        king,
        plan.king_origin,
        plan.king_destination,
        None,
    ))
}

fn parse_move_text(text: &str, body: &str, dims: BoardDims) -> Result<MoveText, NotationError> {
    let (body, promotion_letter) = split_promotion(text, body)?;
    let promotion = promotion_letter
        .map(|letter| {
            PieceKind::from_letter(letter)
                .filter(|kind| PROMOTION_KINDS.contains(kind))
                .ok_or_else(|| NotationError::InvalidPromotion {
                    text: text.to_owned(),
                    reason: format!("cannot promote to {letter:?}"),
                })
        })
        .transpose()?;

    let malformed_destination = || NotationError::MalformedDestination {
        text: text.to_owned(),
    };
    let digits_start = body.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == 0 || digits_start == body.len() {
        return Err(malformed_destination());
    }
    let destination_start = digits_start - 1;
    let destination = algebraic_to_square_on(&body[destination_start..], dims)
        .ok_or_else(malformed_destination)?;

    let mut prefix = &body[..destination_start];
    let mut kind = PieceKind::Pawn;
    if let Some(letter) = prefix.chars().next().filter(char::is_ascii_uppercase) {
        kind = PieceKind::from_letter(letter).ok_or(NotationError::UnrecognizedPiece {
            text: text.to_owned(),
            letter,
        })?;
        prefix = &prefix[1..];
    }

    let mut capture = false;
    if let Some(head) = prefix.strip_suffix(['x', ':']) {
        capture = true;
        prefix = head;
    } else if let Some(head) = prefix.strip_suffix('-') {
        prefix = head;
    }

    let mut from_file = None;
    if let Some(ch) = prefix.chars().next().filter(char::is_ascii_lowercase) {
        from_file = Some(
            file_from_char(ch, dims)
                .ok_or_else(|| malformed(text, "disambiguating file is off the board"))?,
        );
        prefix = &prefix[1..];
    }

    let mut from_rank = None;
    if !prefix.is_empty() {
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(text, "unexpected characters before the destination"));
        }
        let rank = prefix
            .parse::<u8>()
            .ok()
            .filter(|rank| (1..=dims.ranks).contains(rank))
            .ok_or_else(|| malformed(text, "disambiguating rank is off the board"))?;
        from_rank = Some(rank);
    }

    Ok(MoveText {
        kind,
        from_file,
        from_rank,
        capture,
        destination,
        promotion,
    })
}

/// Separate a promotion suffix: `e8=Q`, or a bare letter after the rank as in `e8Q`.
fn split_promotion<'a>(text: &str, body: &'a str) -> Result<(&'a str, Option<char>), NotationError> {
    if let Some((head, tail)) = body.rsplit_once('=') {
        let mut letters = tail.chars();
        return match (letters.next(), letters.next()) {
            (Some(letter), None) => Ok((head, Some(letter))),
            _ => Err(NotationError::InvalidPromotion {
                text: text.to_owned(),
                reason: "expected one piece letter after '='".to_owned(),
            }),
        };
    }

    let bytes = body.as_bytes();
    match bytes {
        [.., digit, letter] if digit.is_ascii_digit() && letter.is_ascii_alphabetic() => {
            Ok((&body[..body.len() - 1], Some(char::from(*letter))))
        }
        _ => Ok((body, None)),
    }
}

fn resolve(
    text: &str,
    board: &Board,
    parsed: &MoveText,
    config: &NotationConfig,
) -> Result<ChessMove, NotationError> {
    let piece = Piece::new(parsed.kind, board.side_to_move());
    let destination = parsed.destination;

    let reachable: Vec<Square> = squares_holding(board, piece)
        .into_iter()
        .filter(|origin| legal_destinations(board, piece, *origin).contains(&destination))
        .filter(|origin| pawn_file_rule(parsed, *origin))
        .collect();
    log::trace!("{text}: {piece} origins reaching {destination}: {reachable:?}");

    let candidates: Vec<Square> = reachable
        .into_iter()
        .filter(|origin| parsed.from_file.map_or(true, |file| origin.file() == file))
        .filter(|origin| parsed.from_rank.map_or(true, |rank| origin.rank() == rank))
        .collect();

    let origin = match candidates.as_slice() {
        [] => {
            return Err(NotationError::NoLegalOrigin {
                text: text.to_owned(),
            })
        }
        [origin] => *origin,
        _ => {
            return Err(NotationError::AmbiguousOrigin {
                text: text.to_owned(),
                candidates,
            })
        }
    };

    let promotion = if reaches_promotion_rank(board, piece, destination) {
        let kind = parsed.promotion.unwrap_or(config.default_promotion);
        if !PROMOTION_KINDS.contains(&kind) {
            return Err(NotationError::InvalidPromotion {
                text: text.to_owned(),
                reason: format!("cannot promote to {kind:?}"),
            });
        }
        Some(kind)
    } else if parsed.promotion.is_some() {
        return Err(NotationError::InvalidPromotion {
            text: text.to_owned(),
            reason: "move does not reach the promotion rank".to_owned(),
        });
    } else {
        None
    };

    let chess_move = build_move_for(board, piece, origin, destination, promotion);
    if parsed.capture && !chess_move.is_capture() {
        return Err(malformed(text, "capture marker on a move that captures nothing"));
    }
    Ok(chess_move)
}

/// Pawn pushes stay on their file; a capture marker means the pawn changes file.
fn pawn_file_rule(parsed: &MoveText, origin: Square) -> bool {
    if parsed.kind != PieceKind::Pawn {
        return true;
    }
    let same_file = origin.file() == parsed.destination.file();
    if parsed.capture {
        !same_file
    } else if parsed.from_file.is_some() {
        true
    } else {
        same_file
    }
}

fn check_annotation(
    text: &str,
    annotation: Option<Annotation>,
    is_check: bool,
    is_mate: bool,
    config: &NotationConfig,
) -> Result<(), NotationError> {
    let annotated = match annotation {
        Some(Annotation::Check) if !is_check => "check",
        Some(Annotation::Mate) if !is_mate => "mate",
        _ => return Ok(()),
    };
    let actual = match (is_check, is_mate) {
        (_, true) => "mate",
        (true, false) => "check",
        (false, false) => "no check",
    };

    if config.strict_annotations {
        return Err(NotationError::AnnotationMismatch {
            text: text.to_owned(),
            annotated,
            actual,
        });
    }
    log::warn!("{text}: annotation says {annotated} but the move gives {actual}");
    Ok(())
}

/// Render `chess_move` in SAN for `board`, the position before the move.
///
/// Disambiguates by file, then rank, then both, and appends `+` or `#`.
pub fn encode(board: &Board, chess_move: &ChessMove) -> String {
    let piece = chess_move.piece;
    let origin = chess_move.origin;
    let destination = chess_move.destination;
    let mut out = String::new();

    if chess_move.is_castling() {
        let side = if destination.file() > origin.file() {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        };
        out.push_str(side.notation());
    } else {
        if piece.kind == PieceKind::Pawn {
            if chess_move.is_capture() {
                out.push(origin.file_char());
            }
        } else {
            out.push(piece.kind.letter());
            let rivals: Vec<Square> = squares_holding(board, piece)
                .into_iter()
                .filter(|square| *square != origin)
                .filter(|square| legal_destinations(board, piece, *square).contains(&destination))
                .collect();
            if !rivals.is_empty() {
                let file_unique = rivals.iter().all(|square| square.file() != origin.file());
                let rank_unique = rivals.iter().all(|square| square.rank() != origin.rank());
                if file_unique {
                    out.push(origin.file_char());
                } else if rank_unique {
                    out.push_str(&origin.rank().to_string());
                } else {
                    out.push_str(&origin.to_string());
                }
            }
        }

        if chess_move.is_capture() {
            out.push('x');
        }
        out.push_str(&destination.to_string());
        if let Some(kind) = chess_move.promotion {
            out.push('=');
            out.push(kind.letter());
        }
    }

    match classify_check(board, chess_move) {
        (_, true) => out.push('#'),
        (true, false) => out.push('+'),
        _ => {}
    }
    out
}
