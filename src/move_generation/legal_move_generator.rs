//! Destination generation and legality filtering.
//!
//! Pseudo-legal destinations come straight from the direction tables. Legal
//! destinations are the pseudo-legal ones that survive a simulation: clone
//! the board, play the move on the clone, and discard it if the mover's king
//! is attacked afterwards. The clone is dropped as soon as the answer is known.

use std::collections::BTreeSet;

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::build_move_for;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pieces_of_color;
use crate::move_generation::legal_moves_king::{castling_destinations, castling_secondary};
use crate::move_generation::legal_moves_pawn::{
    double_step_destination, en_passant_victim, reaches_promotion_rank,
};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_descriptions::{movement_pattern, Repetition, PROMOTION_KINDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DestinationMode {
    /// Squares the piece may move to.
    Moves,
    /// Squares the piece attacks: capture-capable steps only, no castling.
    Attacks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub fn pseudo_legal_destinations(board: &Board, piece: Piece, origin: Square) -> BTreeSet<Square> {
    let mut out = BTreeSet::new();
    collect_destinations(board, piece, origin, DestinationMode::Moves, &mut out);
    out
}

pub fn attack_destinations(board: &Board, piece: Piece, origin: Square) -> BTreeSet<Square> {
    let mut out = BTreeSet::new();
    collect_destinations(board, piece, origin, DestinationMode::Attacks, &mut out);
    out
}

fn collect_destinations(
    board: &Board,
    piece: Piece,
    origin: Square,
    mode: DestinationMode,
    out: &mut BTreeSet<Square>,
) {
    let dims = board.dims;
    let pattern = movement_pattern(piece);

    for step in pattern.directions {
        if mode == DestinationMode::Attacks && !step.rule.can_capture() {
            continue;
        }

        let mut current = origin;
        while let Some(target) = current.offset(step.d_file, step.d_rank, dims) {
            match board.get_piece(target) {
                Some(occupant) if occupant.color == piece.color => break,
                Some(_) => {
                    if step.rule.can_capture() {
                        out.insert(target);
                    }
                    break;
                }
                None => {
                    let lands = match mode {
                        DestinationMode::Attacks => true,
                        DestinationMode::Moves => {
                            step.rule.can_move()
                                || en_passant_victim(board, piece, origin, target).is_some()
                        }
                    };
                    if lands {
                        out.insert(target);
                    }
                }
            }

            if pattern.repetition == Repetition::Single {
                break;
            }
            current = target;
        }
    }

    if mode == DestinationMode::Moves {
        match piece.kind {
            PieceKind::Pawn => out.extend(double_step_destination(board, piece, origin)),
            PieceKind::King => out.extend(castling_destinations(board, piece.color, origin)),
            _ => {}
        }
    }
}

/// Pseudo-legal destinations that do not leave `piece`'s own king attacked.
///
/// Empty when `piece` is not actually standing on `origin`.
pub fn legal_destinations(board: &Board, piece: Piece, origin: Square) -> BTreeSet<Square> {
    if board.get_piece(origin) != Some(piece) {
        return BTreeSet::new();
    }

    pseudo_legal_destinations(board, piece, origin)
        .into_iter()
        .filter(|destination| leaves_king_safe(board, piece, origin, *destination))
        .collect()
}

fn leaves_king_safe(board: &Board, piece: Piece, origin: Square, destination: Square) -> bool {
    let secondary = castling_secondary(board, piece, origin, destination);
    let mut scratch = board.clone();
    if scratch.make_move(origin, destination, None, secondary).is_err() {
        return false;
    }
    !is_king_in_check(&scratch, piece.color)
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    pieces_of_color(board, color)
        .any(|(piece, origin)| !legal_destinations(board, piece, origin).is_empty())
}

/// Every legal move for the side to move, with promotions expanded per piece kind.
pub fn legal_moves(board: &Board) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(64);

    for (piece, origin) in pieces_of_color(board, board.side_to_move) {
        for destination in legal_destinations(board, piece, origin) {
            if reaches_promotion_rank(board, piece, destination) {
                for kind in PROMOTION_KINDS {
                    moves.push(build_move_for(board, piece, origin, destination, Some(kind)));
                }
            } else {
                moves.push(build_move_for(board, piece, origin, destination, None));
            }
        }
    }

    moves
}

/// Whether `chess_move` gives check, and whether that check is mate.
pub fn classify_check(board: &Board, chess_move: &ChessMove) -> (bool, bool) {
    let mut next = board.clone();
    if next
        .make_move(
            chess_move.origin,
            chess_move.destination,
            chess_move.promotion,
            chess_move.secondary(),
        )
        .is_err()
    {
        return (false, false);
    }

    let defender = chess_move.piece.color.opposite();
    let gives_check = is_king_in_check(&next, defender);
    let is_mate = gives_check && !has_legal_move(&next, defender);
    (gives_check, is_mate)
}

pub fn game_status(board: &Board) -> GameStatus {
    let side = board.side_to_move;
    if has_legal_move(board, side) {
        GameStatus::Ongoing
    } else if is_king_in_check(board, side) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
