use crate::errors::MoveError;
use crate::game_state::chess_rules::rook_home_right;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_moves_king::{can_castle, castling_plan_for, castling_secondary};
use crate::move_generation::legal_moves_pawn::{
    en_passant_victim, is_double_step, skipped_square,
};
use crate::moves::chess_move::ChessMove;

/// Apply a move in place.
///
/// The move is expected to come from the legality filter or the notation
/// decoder. Structural problems (empty origin, own piece on the destination,
/// a castling move the position does not allow) are reported before anything
/// is touched, so an `Err` always leaves `board` unchanged.
pub fn make_move(
    board: &mut Board,
    origin: Square,
    destination: Square,
    promotion: Option<PieceKind>,
    secondary: Option<(Square, Square)>,
) -> Result<(), MoveError> {
    let piece = validate_move(board, origin, destination, secondary)?;
    let mover = board.side_to_move;
    let dims = board.dims;

    // Resolved against the target left by the previous ply.
    let en_passant_square = if board.get_piece(destination).is_none() {
        en_passant_victim(board, piece, origin, destination)
    } else {
        None
    };
    let captured = board
        .get_piece(destination)
        .or_else(|| en_passant_square.and_then(|square| board.get_piece(square)));

    // Moved flags.
    board.set_moved(origin, true);
    if let Some((rook_origin, _)) = secondary {
        board.set_moved(rook_origin, true);
    }

    // Castling rights.
    if piece.kind == PieceKind::King {
        board.castling_rights &= !(castle_flag(piece.color, CastleSide::KingSide)
            | castle_flag(piece.color, CastleSide::QueenSide));
    }
    if piece.kind == PieceKind::Rook {
        if let Some(flag) = rook_home_right(dims, piece.color, origin) {
            board.castling_rights &= !flag;
        }
    }
    if let Some(victim) = captured.filter(|victim| victim.kind == PieceKind::Rook) {
        if let Some(flag) = rook_home_right(dims, victim.color, destination) {
            board.castling_rights &= !flag;
        }
    }

    // En-passant capture removes the pawn behind the destination.
    if let Some(square) = en_passant_square {
        board.set_square(square, None);
    }

    board.en_passant_target = if is_double_step(piece, origin, destination) {
        skipped_square(piece, origin, dims)
    } else {
        None
    };

    if piece.kind == PieceKind::Pawn || captured.is_some() {
        board.half_move_clock = 0;
    } else {
        board.half_move_clock = board.half_move_clock.saturating_add(1);
    }
    if mover == Color::Black {
        board.full_move_clock = board.full_move_clock.saturating_add(1);
    }

    let placed = promotion.map_or(piece, |kind| Piece::new(kind, piece.color));
    board.set_square(origin, None);
    board.set_square(destination, Some(placed));

    if let Some((rook_origin, rook_destination)) = secondary {
        let rook = board.get_piece(rook_origin);
        board.set_square(rook_origin, None);
        board.set_square(rook_destination, rook);
    }

    board.side_to_move = mover.opposite();
    Ok(())
}

fn validate_move(
    board: &Board,
    origin: Square,
    destination: Square,
    secondary: Option<(Square, Square)>,
) -> Result<Piece, MoveError> {
    board.index(origin)?;
    board.index(destination)?;

    let piece = board
        .get_piece(origin)
        .ok_or(MoveError::EmptyOrigin(origin))?;

    if board
        .get_piece(destination)
        .is_some_and(|occupant| occupant.color == piece.color)
    {
        return Err(MoveError::OwnPieceAtDestination {
            origin,
            destination,
        });
    }

    let illegal_castling = MoveError::IllegalCastling {
        origin,
        destination,
    };
    match secondary {
        Some((rook_origin, rook_destination)) => {
            board.index(rook_origin)?;
            board.index(rook_destination)?;

            let Some((side, plan)) = castling_plan_for(board, piece, origin, destination) else {
                return Err(illegal_castling);
            };
            if plan.rook_origin != rook_origin
                || plan.rook_destination != rook_destination
                || !can_castle(board, side, piece.color)
            {
                return Err(illegal_castling);
            }
        }
        None => {
            if piece.kind == PieceKind::King && origin.file().abs_diff(destination.file()) > 1 {
                return Err(illegal_castling);
            }
        }
    }

    Ok(piece)
}

/// Describe moving `piece` from `origin` to `destination` on `board`.
///
/// Fills in the captured piece (including an en-passant victim) and the rook
/// relocation for castling. Check flags are left unset.
pub fn build_move_for(
    board: &Board,
    piece: Piece,
    origin: Square,
    destination: Square,
    promotion: Option<PieceKind>,
) -> ChessMove {
    let mut chess_move = ChessMove::quiet(piece, origin, destination);
    chess_move.promotion = promotion;

    if let Some(occupant) = board.get_piece(destination) {
        chess_move.captured_piece = Some(occupant);
        chess_move.capture_square = Some(destination);
    } else if let Some(square) = en_passant_victim(board, piece, origin, destination) {
        chess_move.captured_piece = board.get_piece(square);
        chess_move.capture_square = Some(square);
    }

    if let Some((rook_origin, rook_destination)) =
        castling_secondary(board, piece, origin, destination)
    {
        chess_move.secondary_origin = Some(rook_origin);
        chess_move.secondary_destination = Some(rook_destination);
    }

    chess_move
}

pub fn build_move(
    board: &Board,
    origin: Square,
    destination: Square,
    promotion: Option<PieceKind>,
) -> Result<ChessMove, MoveError> {
    let piece = board
        .get_piece(origin)
        .ok_or(MoveError::EmptyOrigin(origin))?;
    Ok(build_move_for(board, piece, origin, destination, promotion))
}

/// Apply `chess_move`, returning the unit that restores the prior position.
pub fn apply_chess_move(board: &mut Board, chess_move: &ChessMove) -> Result<SaveUnit, MoveError> {
    let save_unit = SaveUnit::capture(
        board,
        chess_move.origin,
        chess_move.destination,
        chess_move.secondary(),
    );
    make_move(
        board,
        chess_move.origin,
        chess_move.destination,
        chess_move.promotion,
        chess_move.secondary(),
    )?;
    Ok(save_unit)
}
