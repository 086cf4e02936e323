//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! This file exposes the board model, the move history, the movement engine,
//! and the text codecs (FEN, algebraic notation, PGN) so the driver binary,
//! tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod board_stack;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod save_unit;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod piece_square;
    pub mod render_game_state;
    pub mod standard_algebraic;
}
