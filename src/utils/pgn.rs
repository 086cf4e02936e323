//! PGN read/write utilities for game history interchange.
//!
//! Movetext is replayed through `Game::play`, so every move is decoded as SAN
//! against the position it is played in. Written games use each move's
//! recorded text.

use std::collections::BTreeMap;

use crate::errors::PgnError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, GameResult};
use crate::game_state::game::Game;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub game: Game,
    pub result: GameResult,
}

/// Split movetext into move and result tokens.
///
/// Drops `{}` and `;` comments, `()` variations, `$n` glyphs and move
/// numbers, whether written `12.`, `12...` or glued to the move as `12.e4`.
pub fn tokenize_movetext(text: &str) -> Vec<String> {
    strip_comments_and_variations(text)
        .split_whitespace()
        .filter_map(|token| {
            let token = strip_move_number(token);
            if token.is_empty() || token.starts_with('$') {
                None
            } else {
                Some(token.to_owned())
            }
        })
        .collect()
}

/// Play `text` on `game`, stopping at a result token.
///
/// Returns the result token when the movetext has one. On error the moves
/// before the failing one stay played.
pub fn replay_movetext(game: &mut Game, text: &str) -> Result<Option<GameResult>, PgnError> {
    for (ply, token) in tokenize_movetext(text).iter().enumerate() {
        if let Some(result) = GameResult::from_token(token) {
            return Ok(Some(result));
        }
        game.play(token).map_err(|source| PgnError::Replay {
            ply: ply + 1,
            source,
        })?;
    }
    Ok(None)
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, PgnError> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<&str>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            movetext_lines.push(trimmed);
        }
    }

    let mut game = match headers.get("FEN") {
        Some(fen) if headers.get("SetUp").map(String::as_str) != Some("0") => Game::from_fen(fen)?,
        _ if headers.get("SetUp").map(String::as_str) == Some("1") => {
            return Err(PgnError::InvalidHeader(
                "SetUp is 1 but the FEN header is missing".to_owned(),
            ))
        }
        _ => Game::new(),
    };

    let movetext_result = replay_movetext(&mut game, &movetext_lines.join("\n"))?;
    let result = headers
        .get("Result")
        .and_then(|value| GameResult::from_token(value))
        .or(movetext_result)
        .unwrap_or(GameResult::Undecided);

    Ok(PgnGame {
        headers,
        game,
        result,
    })
}

/// Write `game` with the seven standard tags, dated today.
pub fn write_pgn(game: &Game, result: GameResult) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        chrono::Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.token().to_owned());

    write_pgn_with_headers(game, &headers)
}

pub fn write_pgn_with_headers(game: &Game, headers: &BTreeMap<String, String>) -> String {
    let mut headers = headers.clone();
    let initial = game.history().initial_board();
    let initial_fen = initial.to_fen_string();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut move_number = initial.full_move_clock();
    let mut side = initial.side_to_move();
    let mut parts = Vec::<String>::new();
    for (index, chess_move) in game.moves().iter().enumerate() {
        match side {
            Color::White => parts.push(format!("{}. {}", move_number, chess_move)),
            Color::Black if index == 0 => parts.push(format!("{}... {}", move_number, chess_move)),
            Color::Black => parts.push(chess_move.to_string()),
        }
        if side == Color::Black {
            move_number += 1;
        }
        side = side.opposite();
    }

    let result = headers
        .get("Result")
        .and_then(|value| GameResult::from_token(value))
        .unwrap_or(GameResult::Undecided);
    parts.push(result.token().to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

fn parse_header_line(line: &str) -> Result<(String, String), PgnError> {
    let invalid = || PgnError::InvalidHeader(line.to_owned());
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;
    if key.trim().is_empty() {
        return Err(invalid());
    }
    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

fn strip_comments_and_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut line_comment = false;

    for ch in text.chars() {
        match ch {
            '\n' if line_comment => {
                line_comment = false;
                out.push(' ');
            }
            _ if line_comment => {}
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' if brace_depth == 0 => paren_depth = paren_depth.saturating_add(1),
            ')' if brace_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            ';' if brace_depth == 0 && paren_depth == 0 => line_comment = true,
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => out.push(' '),
        }
    }

    out
}

/// `12.`, `12...` and `12.e4` lose their number; anything else is returned as is.
fn strip_move_number(token: &str) -> &str {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits_end == 0 || !token[digits_end..].starts_with('.') {
        return token;
    }
    token[digits_end..].trim_start_matches('.')
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
