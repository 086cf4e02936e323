//! Move-path enumeration over the clone-based legality filter.
//!
//! Counting leaf nodes to a fixed depth and comparing with published totals
//! is the standard end-to-end check of a move generator.

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_generator::{classify_check, legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> Result<PerftCounts, MoveError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(board, depth, &mut total)?;
    Ok(total)
}

/// Per-root-move node counts, keyed by coordinate notation.
pub fn perft_divide(board: &Board, depth: u8) -> Result<Vec<(String, usize)>, MoveError> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for chess_move in legal_moves(board) {
        let mut next = board.clone();
        next.apply_move(&chess_move)?;
        let counts = perft(&next, depth - 1)?;
        out.push((chess_move.long_algebraic(), counts.nodes));
    }
    Ok(out)
}

fn perft_recurse(board: &Board, depth: u8, counts: &mut PerftCounts) -> Result<(), MoveError> {
    let moves = legal_moves(board);

    if depth == 1 {
        for chess_move in &moves {
            let mut leaf = PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            };
            if chess_move.is_capture() {
                leaf.captures = 1;
            }
            if chess_move.is_en_passant() {
                leaf.en_passant = 1;
            }
            if chess_move.is_castling() {
                leaf.castles = 1;
            }
            if chess_move.promotion.is_some() {
                leaf.promotions = 1;
            }

            let (gives_check, is_mate) = classify_check(board, chess_move);
            if gives_check {
                leaf.checks = 1;
            }
            if is_mate {
                leaf.checkmates = 1;
            }
            counts.merge(leaf);
        }
        return Ok(());
    }

    for chess_move in &moves {
        let mut next = board.clone();
        next.apply_move(chess_move)?;
        perft_recurse(&next, depth - 1, counts)?;
    }

    Ok(())
}
