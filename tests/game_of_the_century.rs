use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::chess_types::GameResult;
use plum_rules::game_state::game::Game;
use plum_rules::move_generation::legal_move_generator::GameStatus;
use plum_rules::utils::pgn::{read_pgn, replay_movetext, tokenize_movetext, write_pgn};
use plum_rules::utils::standard_algebraic::{decode, encode};

// Byrne vs Fischer, New York 1956.
const MOVETEXT: &str = "1.Nf3 Nf6 2.c4 g6 3.Nc3 Bg7 4.d4 O-O 5.Bf4 d5 6.Qb3 dxc4 \
7.Qxc4 c6 8.e4 Nbd7 9.Rd1 Nb6 10.Qc5 Bg4 11.Bg5 Na4 12.Qa3 Nxc3 13.bxc3 Nxe4 \
14.Bxe7 Qb6 15.Bc4 Nxc3 16.Bc5 Rfe8+ 17.Kf1 Be6 18.Bxb6 Bxc4+ 19.Kg1 Ne2+ \
20.Kf1 Nxd4+ 21.Kg1 Ne2+ 22.Kf1 Nc3+ 23.Kg1 axb6 24.Qb4 Ra4 25.Qxb6 Nxd1 \
26.h3 Rxa2 27.Kh2 Nxf2 28.Re1 Rxe1 29.Qd8+ Bf8 30.Nxe1 Bd5 31.Nf3 Ne4 \
32.Qb8 b5 33.h4 h5 34.Ne5 Kg7 35.Kg1 Bc5+ 36.Kf1 Ng3+ 37.Ke1 Bb4+ 38.Kd1 Bb3+ \
39.Kc1 Ne2+ 40.Kb1 Nc3+ 41.Kc1 Rc2# 0-1";

const FINAL_FEN: &str = "1Q6/5pk1/2p3p1/1p2N2p/1b5P/1bn5/2r3P1/2K5 w - - 16 42";
const AFTER_KC1_FEN: &str = "1Q6/5pk1/2p3p1/1p2N2p/1b5P/1bn5/r5P1/2K5 b - - 15 41";

fn played_game() -> Game {
    let mut game = Game::new();
    let result = replay_movetext(&mut game, MOVETEXT).expect("game replays");
    assert_eq!(result, Some(GameResult::BlackWins));
    game
}

#[test]
fn replay_reaches_final_position() {
    let game = played_game();
    assert_eq!(game.moves().len(), 82);
    assert_eq!(game.to_fen_string(), FINAL_FEN);
    assert_eq!(game.status(), GameStatus::Checkmate);

    let last = game.last_move().expect("game has moves");
    assert_eq!(last.spec_text, "Rc2#");
    assert!(last.is_check);
    assert!(last.is_mate);
}

#[test]
fn undo_of_mating_move_restores_prior_position() {
    let mut game = played_game();
    let undone = game.undo().expect("mate can be taken back");
    assert_eq!(undone.spec_text, "Rc2#");
    assert_eq!(game.to_fen_string(), AFTER_KC1_FEN);
    assert_eq!(game.status(), GameStatus::Ongoing);

    game.redo().expect("mate can be replayed");
    assert_eq!(game.to_fen_string(), FINAL_FEN);
}

#[test]
fn full_undo_and_redo_walks_every_position() {
    let mut fens = vec![STARTING_POSITION_FEN.to_owned()];
    let mut game = Game::new();
    for token in tokenize_movetext(MOVETEXT) {
        if GameResult::from_token(&token).is_some() {
            break;
        }
        game.play(&token).expect("recorded move is legal");
        fens.push(game.to_fen_string());
    }

    while game.history().can_undo() {
        game.undo().expect("move to undo");
        assert_eq!(&game.to_fen_string(), &fens[game.history().current_index()]);
    }
    assert_eq!(game.to_fen_string(), STARTING_POSITION_FEN);

    while game.history().can_redo() {
        game.redo().expect("move to redo");
        assert_eq!(&game.to_fen_string(), &fens[game.history().current_index()]);
    }
    assert_eq!(game.to_fen_string(), FINAL_FEN);
}

#[test]
fn every_recorded_move_encodes_to_its_text() {
    let mut board = Board::new_game();
    for token in tokenize_movetext(MOVETEXT) {
        if GameResult::from_token(&token).is_some() {
            break;
        }
        let chess_move = decode(&token, &board).expect("recorded move decodes");
        assert_eq!(encode(&board, &chess_move), token);
        board.apply_move(&chess_move).expect("decoded move applies");
    }
    assert_eq!(board.to_fen_string(), FINAL_FEN);
}

#[test]
fn pgn_round_trip_keeps_result_and_moves() {
    let game = played_game();
    let pgn = write_pgn(&game, GameResult::BlackWins);
    assert!(pgn.contains("[Result \"0-1\"]"));
    assert!(pgn.contains("41. Kc1 Rc2# 0-1"));

    let parsed = read_pgn(&pgn).expect("written PGN reads back");
    assert_eq!(parsed.result, GameResult::BlackWins);
    assert_eq!(parsed.game.to_fen_string(), FINAL_FEN);
}
