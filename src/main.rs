//! Line-oriented driver over a single game.
//!
//! Run with `cargo run` and type commands, one per line:
//! `fen <FEN>`, `setup :Kc1Qe1kh7 w`, `moves`, `undo`, `redo`, `show`,
//! `legal <square>`, `perft <depth>`, `pgn`, `quit`. Anything else is played
//! as movetext, e.g. `1. e4 e5 2. Nf3`. Set `RUST_LOG=debug` to trace play.

use std::io::{self, BufRead, Write};

use plum_rules::game_state::chess_types::{Color, GameResult, Square};
use plum_rules::game_state::game::Game;
use plum_rules::move_generation::legal_move_generator::GameStatus;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::pgn::{replay_movetext, write_pgn};
use plum_rules::utils::piece_square::parse_piece_square;

fn main() {
    env_logger::init();

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        let reply = run_command(&mut game, trimmed);
        println!("{reply}");
        stdout.flush().ok();
    }
}

fn run_command(game: &mut Game, line: &str) -> String {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "fen" if !rest.is_empty() => match game.load_fen(rest) {
            Ok(()) => game.to_fen_string(),
            Err(err) => format!("error: {err}"),
        },
        "fen" => game.to_fen_string(),
        "setup" => match parse_piece_square(rest, game.board().dims()) {
            Ok(board) => {
                *game = Game::from_board(board);
                game.to_fen_string()
            }
            Err(err) => format!("error: {err}"),
        },
        "moves" => game
            .moves()
            .iter()
            .map(|chess_move| chess_move.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        "undo" => match game.undo() {
            Some(chess_move) => format!("undid {chess_move}"),
            None => "nothing to undo".to_owned(),
        },
        "redo" => match game.redo() {
            Some(chess_move) => format!("redid {chess_move}"),
            None => "nothing to redo".to_owned(),
        },
        "show" => format!("{}\n{}", game.board(), game.to_fen_string()),
        "legal" => match rest.parse::<Square>() {
            Ok(square) => match game.board().get_piece(square) {
                Some(piece) => game
                    .board()
                    .legal_destinations(piece, square)
                    .iter()
                    .map(Square::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
                None => format!("no piece on {square}"),
            },
            Err(err) => format!("error: {err}"),
        },
        "perft" => match rest.parse::<u8>() {
            Ok(depth) => match perft(game.board(), depth) {
                Ok(counts) => format!("{counts:?}"),
                Err(err) => format!("error: {err}"),
            },
            Err(err) => format!("error: bad depth {rest:?}: {err}"),
        },
        "pgn" => write_pgn(game, current_result(game)),
        _ => play_movetext(game, line),
    }
}

fn play_movetext(game: &mut Game, text: &str) -> String {
    match replay_movetext(game, text) {
        Ok(result) => {
            let mut reply = game.to_fen_string();
            match game.status() {
                GameStatus::Checkmate => reply.push_str(" (checkmate)"),
                GameStatus::Stalemate => reply.push_str(" (stalemate)"),
                GameStatus::Ongoing => {}
            }
            if let Some(result) = result {
                reply.push(' ');
                reply.push_str(result.token());
            }
            reply
        }
        Err(err) => format!("error: {err}"),
    }
}

fn current_result(game: &Game) -> GameResult {
    match game.status() {
        GameStatus::Checkmate => match game.board().side_to_move() {
            Color::White => GameResult::BlackWins,
            Color::Black => GameResult::WhiteWins,
        },
        GameStatus::Stalemate => GameResult::Draw,
        GameStatus::Ongoing => game
            .last_move()
            .and_then(|chess_move| chess_move.game_result)
            .unwrap_or(GameResult::Undecided),
    }
}
