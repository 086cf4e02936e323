//! Linear undo/redo history.
//!
//! Entry 0 is the starting board; every later entry holds the board a move
//! produced together with that move and the `SaveUnit` taken just before it.
//! `undo` and `redo` only move the cursor. Entries past the cursor stay
//! available for redo until the next `push` truncates them.

use crate::game_state::board::Board;
use crate::game_state::save_unit::SaveUnit;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Move that produced `board`; `None` for the starting entry.
    pub chess_move: Option<ChessMove>,
    pub save_unit: Option<SaveUnit>,
}

#[derive(Debug, Clone)]
pub struct BoardStack {
    entries: Vec<HistoryEntry>,
    current_index: usize,
}

impl BoardStack {
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: initial,
                chess_move: None,
                save_unit: None,
            }],
            current_index: 0,
        }
    }

    /// Append a board after the cursor, discarding any pending redo entries.
    pub fn push(&mut self, board: Board, chess_move: ChessMove, save_unit: SaveUnit) {
        self.entries.truncate(self.current_index + 1);
        self.entries.push(HistoryEntry {
            board,
            chess_move: Some(chess_move),
            save_unit: Some(save_unit),
        });
        self.current_index = self.entries.len() - 1;
    }

    /// Step back one entry and return the entry being left, or `None` at the start.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.current_index == 0 {
            return None;
        }
        let discarded = self.current_index;
        self.current_index -= 1;
        self.entries.get(discarded)
    }

    /// Step forward one entry and return it, or `None` when nothing was undone.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.current_index + 1 >= self.entries.len() {
            return None;
        }
        self.current_index += 1;
        self.entries.get(self.current_index)
    }

    #[inline]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current_index]
    }

    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.entries[0].board
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    /// Moves leading from the starting board to the current one.
    pub fn moves(&self) -> Vec<&ChessMove> {
        self.entries[1..=self.current_index]
            .iter()
            .filter_map(|entry| entry.chess_move.as_ref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Square;
    use crate::move_generation::legal_move_apply::{apply_chess_move, build_move};

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn play(stack: &mut BoardStack, origin: &str, destination: &str) {
        let mut board = stack.current_board().clone();
        let chess_move = build_move(&board, sq(origin), sq(destination), None).expect("piece");
        let unit = apply_chess_move(&mut board, &chess_move).expect("move applies");
        stack.push(board, chess_move, unit);
    }

    #[test]
    fn undo_and_redo_walk_the_cursor() {
        let mut stack = BoardStack::new(Board::new_game());
        assert!(stack.undo().is_none());
        assert!(stack.redo().is_none());

        play(&mut stack, "e2", "e4");
        play(&mut stack, "e7", "e5");
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.current_index(), 2);

        let undone = stack.undo().and_then(|entry| entry.chess_move.clone());
        assert_eq!(undone.map(|m| m.destination), Some(sq("e5")));
        assert_eq!(stack.current_index(), 1);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.moves().len(), 1);

        let redone = stack.redo().and_then(|entry| entry.chess_move.clone());
        assert_eq!(redone.map(|m| m.destination), Some(sq("e5")));
        assert!(stack.redo().is_none());
    }

    #[test]
    fn push_after_undo_discards_redo_entries() {
        let mut stack = BoardStack::new(Board::new_game());
        play(&mut stack, "e2", "e4");
        play(&mut stack, "e7", "e5");
        stack.undo();
        stack.undo();
        assert_eq!(stack.current_board(), stack.initial_board());
        assert!(stack.can_redo());

        play(&mut stack, "d2", "d4");
        assert_eq!(stack.len(), 2);
        assert!(!stack.can_redo());
        assert_eq!(stack.moves()[0].destination, sq("d4"));
    }
}
