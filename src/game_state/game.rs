//! A live board paired with its undo/redo history.
//!
//! `Game` is the entry point for playing moves from text. Each accepted move
//! is decoded against the live board, applied in place, and pushed onto the
//! history together with the `SaveUnit` that takes it back.

use crate::errors::{FenError, GameError, NotationError};
use crate::game_state::board::Board;
use crate::game_state::board_stack::BoardStack;
use crate::move_generation::legal_move_generator::{game_status, legal_destinations, GameStatus};
use crate::move_generation::legal_moves_pawn::reaches_promotion_rank;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_descriptions::PROMOTION_KINDS;
use crate::utils::standard_algebraic::{decode_with_config, encode, NotationConfig};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: BoardStack,
    config: NotationConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new_game())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            history: BoardStack::new(board.clone()),
            board,
            config: NotationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: NotationConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &BoardStack {
        &self.history
    }

    #[inline]
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    /// Resolve move text against the live board without playing it.
    pub fn decode(&self, text: &str) -> Result<ChessMove, NotationError> {
        decode_with_config(text, &self.board, &self.config)
    }

    /// Decode and play one move. On error nothing changes.
    pub fn play(&mut self, text: &str) -> Result<ChessMove, GameError> {
        let chess_move = self.decode(text)?;
        self.play_move(chess_move)
    }

    /// Play an already resolved move, such as one from `legal_moves`.
    ///
    /// The mover must be the side to move. A pawn reaching the last rank
    /// without a promotion piece gets `NotationConfig::default_promotion`.
    /// Moves without text get their SAN filled in before they are recorded.
    pub fn play_move(&mut self, mut chess_move: ChessMove) -> Result<ChessMove, GameError> {
        let on_turn = chess_move.piece.color == self.board.side_to_move();
        let legal = on_turn
            && legal_destinations(&self.board, chess_move.piece, chess_move.origin)
                .contains(&chess_move.destination);
        if !legal {
            return Err(GameError::Notation(NotationError::NoLegalOrigin {
                text: chess_move.to_string(),
            }));
        }

        let promotes =
            reaches_promotion_rank(&self.board, chess_move.piece, chess_move.destination);
        if promotes && chess_move.promotion.is_none() {
            chess_move.promotion = Some(self.config.default_promotion);
        }
        match chess_move.promotion {
            Some(kind) if !promotes || !PROMOTION_KINDS.contains(&kind) => {
                return Err(GameError::Notation(NotationError::InvalidPromotion {
                    text: chess_move.to_string(),
                    reason: format!("cannot promote to {kind:?} here"),
                }));
            }
            _ => {}
        }

        if chess_move.spec_text.is_empty() {
            chess_move.spec_text = encode(&self.board, &chess_move);
            chess_move.is_check = chess_move.spec_text.ends_with(['+', '#']);
            chess_move.is_mate = chess_move.spec_text.ends_with('#');
        }

        let save_unit = self
            .board
            .apply_move(&chess_move)
            .map_err(|source| GameError::Move {
                text: chess_move.to_string(),
                source,
            })?;

        log::debug!(
            "played {} ({}), now {}",
            chess_move,
            chess_move.long_algebraic(),
            self.board.to_fen_string()
        );
        self.history
            .push(self.board.clone(), chess_move.clone(), save_unit);
        Ok(chess_move)
    }

    /// Take back the current move, returning it, or `None` at the start.
    pub fn undo(&mut self) -> Option<ChessMove> {
        let entry = self.history.undo()?;
        let chess_move = entry.chess_move.clone()?;
        let save_unit = entry.save_unit.clone()?;

        save_unit.restore(&mut self.board);
        debug_assert_eq!(&self.board, self.history.current_board());
        log::debug!("undid {chess_move}");
        Some(chess_move)
    }

    /// Replay the next undone move, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<ChessMove> {
        let entry = self.history.redo()?;
        let chess_move = entry.chess_move.clone()?;

        if let Err(err) = self.board.apply_move(&chess_move) {
            log::warn!("redo of {chess_move} failed ({err}); restoring recorded board");
            self.board = entry.board.clone();
        }
        debug_assert_eq!(&self.board, self.history.current_board());
        log::debug!("redid {chess_move}");
        Some(chess_move)
    }

    /// Start over from `fen`, clearing the history. On error nothing changes.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let mut board = self.board.clone();
        board.load_fen(fen)?;
        self.history = BoardStack::new(board.clone());
        self.board = board;
        Ok(())
    }

    #[inline]
    pub fn to_fen_string(&self) -> String {
        self.board.to_fen_string()
    }

    /// Moves played from the starting board up to the current position.
    pub fn moves(&self) -> Vec<&ChessMove> {
        self.history.moves()
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.current().chess_move.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::move_generation::legal_move_apply::build_move;
    use crate::move_generation::legal_move_generator::legal_moves;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn play_undo_redo_restores_fens() {
        let mut game = Game::new();
        let texts = ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6", "O-O"];
        let mut fens = vec![game.to_fen_string()];
        for text in texts {
            game.play(text).expect("opening move is legal");
            fens.push(game.to_fen_string());
        }
        assert_eq!(game.moves().len(), texts.len());

        for (index, text) in texts.iter().enumerate().rev() {
            let undone = game.undo().expect("a move to undo");
            assert_eq!(undone.spec_text, *text);
            assert_eq!(game.to_fen_string(), fens[index]);
        }
        assert_eq!(game.undo(), None);
        assert_eq!(game.to_fen_string(), STARTING_POSITION_FEN);

        for fen in &fens[1..] {
            game.redo().expect("a move to redo");
            assert_eq!(&game.to_fen_string(), fen);
        }
        assert_eq!(game.redo(), None);
    }

    #[test]
    fn new_move_after_undo_discards_redo() {
        let mut game = Game::new();
        game.play("d4").expect("legal");
        game.play("d5").expect("legal");
        game.undo().expect("undo d5");
        game.play("Nf6").expect("legal");

        assert_eq!(game.redo(), None);
        let played: Vec<&str> = game.moves().iter().map(|m| m.spec_text.as_str()).collect();
        assert_eq!(played, ["d4", "Nf6"]);
    }

    #[test]
    fn rejected_move_leaves_game_untouched() {
        let mut game = Game::new();
        game.play("e4").expect("legal");
        let fen = game.to_fen_string();

        let err = game.play("e5e4").expect_err("blocked pawn");
        assert!(matches!(
            err,
            GameError::Notation(NotationError::NoLegalOrigin { .. })
        ));
        assert_eq!(game.to_fen_string(), fen);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn play_move_rejects_the_side_not_on_turn() {
        let mut game = Game::new();
        let black_push =
            build_move(game.board(), sq("e7"), sq("e5"), None).expect("pawn on e7");

        let err = game.play_move(black_push).expect_err("white is to move");
        assert!(matches!(
            err,
            GameError::Notation(NotationError::NoLegalOrigin { .. })
        ));
        assert_eq!(game.to_fen_string(), STARTING_POSITION_FEN);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn play_move_fills_in_default_promotion() {
        let fen = "8/P6k/8/8/8/8/8/K7 w - - 0 1";
        let mut game = Game::from_fen(fen).expect("FEN parses");
        let push = build_move(game.board(), sq("a7"), sq("a8"), None).expect("pawn on a7");

        let played = game.play_move(push).expect("promotion is legal");
        assert_eq!(played.promotion, Some(PieceKind::Queen));
        assert_eq!(played.spec_text, "a8=Q");
        assert_eq!(game.to_fen_string(), "Q7/7k/8/8/8/8/8/K7 b - - 0 1");

        let mut knights = Game::from_fen(fen).expect("FEN parses").with_config(NotationConfig {
            default_promotion: PieceKind::Knight,
            ..NotationConfig::default()
        });
        let push = build_move(knights.board(), sq("a7"), sq("a8"), None).expect("pawn on a7");
        assert_eq!(
            knights.play_move(push).map(|m| m.promotion),
            Ok(Some(PieceKind::Knight))
        );
    }

    #[test]
    fn play_move_rejects_bad_promotions() {
        let fen = "8/P6k/8/8/8/8/8/K7 w - - 0 1";
        let mut game = Game::from_fen(fen).expect("FEN parses");

        let to_king =
            build_move(game.board(), sq("a7"), sq("a8"), Some(PieceKind::King)).expect("pawn");
        assert!(matches!(
            game.play_move(to_king),
            Err(GameError::Notation(NotationError::InvalidPromotion { .. }))
        ));

        let king_step =
            build_move(game.board(), sq("a1"), sq("b1"), Some(PieceKind::Queen)).expect("king");
        assert!(matches!(
            game.play_move(king_step),
            Err(GameError::Notation(NotationError::InvalidPromotion { .. }))
        ));
        assert_eq!(game.to_fen_string(), fen);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn load_fen_resets_history() {
        let mut game = Game::new();
        game.play("e4").expect("legal");
        assert!(game.load_fen("not a fen").is_err());
        assert_eq!(game.moves().len(), 1);

        game.load_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("valid FEN");
        assert!(game.moves().is_empty());
        assert_eq!(game.undo(), None);
        game.play("O-O").expect("castling is allowed");
        assert_eq!(game.to_fen_string(), "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
    }

    #[test]
    fn random_playout_undoes_to_every_prior_fen() {
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
        let mut game = Game::new();
        let mut fens = vec![game.to_fen_string()];

        for _ in 0..60 {
            let moves = legal_moves(game.board());
            if moves.is_empty() {
                break;
            }
            let pick = moves[rng.random_range(0..moves.len())].clone();
            let played = game.play_move(pick).expect("generated move is legal");
            assert!(!played.spec_text.is_empty());
            assert_eq!(game.history().current_board(), game.board());
            fens.push(game.to_fen_string());
        }

        for fen in fens.iter().rev().skip(1) {
            game.undo().expect("move to undo");
            assert_eq!(&game.to_fen_string(), fen);
        }
        for fen in fens.iter().skip(1) {
            game.redo().expect("move to redo");
            assert_eq!(&game.to_fen_string(), fen);
        }
    }

    #[test]
    fn encoded_text_decodes_to_the_same_move() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = Game::new();
        for _ in 0..40 {
            let moves = legal_moves(game.board());
            if moves.is_empty() {
                break;
            }
            let pick = moves[rng.random_range(0..moves.len())].clone();
            let text = encode(game.board(), &pick);
            let decoded = game.decode(&text).expect("encoded SAN decodes");
            assert_eq!(
                (decoded.origin, decoded.destination, decoded.promotion),
                (pick.origin, pick.destination, pick.promotion),
                "{text}"
            );
            game.play_move(pick).expect("legal");
        }
    }
}
