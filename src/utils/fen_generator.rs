use crate::game_state::{board::Board, chess_types::*};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_board_field(board);
    let castling = generate_castling_field(board.castling_rights);
    let en_passant = generate_en_passant_field(board.en_passant_target);

    format!(
        "{} {} {} {} {} {}",
        placement,
        board.side_to_move.fen_char(),
        castling,
        en_passant,
        board.half_move_clock,
        board.full_move_clock
    )
}

fn generate_board_field(board: &Board) -> String {
    let dims = board.dims;
    let mut out = String::new();

    for rank in (1..=dims.ranks).rev() {
        let mut empty_count = 0u32;

        for file in 1..=dims.files {
            if let Some(piece) = board.get_piece(Square::new(file, rank)) {
                if empty_count > 0 {
                    out.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    match square {
        Some(square) => square_to_algebraic(square),
        None => "-".to_owned(),
    }
}
