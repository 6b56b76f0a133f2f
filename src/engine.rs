//! Main AI engine facade
//!
//! Integrates the candidate generator, evaluator, and search driver behind
//! the two calls external collaborators use: pick a move for a position,
//! and read back the statistics of the last search. The engine never
//! touches rendering, storage, or sockets; it sees the world as a board
//! snapshot, a color to move, and a difficulty tier.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place(Pos::center(), Stone::Black);
//!
//! let mov = engine
//!     .choose_move(&board, Stone::White, Difficulty::Easy)
//!     .unwrap();
//! assert!(board.is_empty(mov));
//! ```

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::profile::Difficulty;
use crate::search::{SearchResult, SearchStats, Searcher};

/// AI engine choosing moves for one side.
///
/// Owns a [`Searcher`] and the statistics of the most recent call. One
/// engine serves one search at a time; a caller wanting a responsive UI
/// dispatches `choose_move` to a worker thread and delivers the result
/// back asynchronously.
pub struct AIEngine {
    searcher: Searcher,
    last_stats: Option<SearchStats>,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            last_stats: None,
        }
    }

    /// Choose a move for `color` under the given difficulty tier.
    ///
    /// The board passed in is never mutated. Precondition: the game is not
    /// over and at least one empty cell exists.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMoves`] when the board is full.
    pub fn choose_move(
        &mut self,
        board: &Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> Result<Pos, EngineError> {
        self.choose_move_with_stats(board, color, difficulty)
            .map(|result| result.best_move)
    }

    /// Choose a move and return the full search result.
    ///
    /// Same contract as [`AIEngine::choose_move`], with score, completed
    /// depth, and statistics included.
    pub fn choose_move_with_stats(
        &mut self,
        board: &Board,
        color: Stone,
        difficulty: Difficulty,
    ) -> Result<SearchResult, EngineError> {
        let profile = difficulty.profile();
        let result = self.searcher.search(board, color, &profile)?;

        info!(
            "{} chose ({}, {}) score {} at depth {} ({} nodes, {} pruned, {:?})",
            profile.name,
            result.best_move.row,
            result.best_move.col,
            result.score,
            result.depth,
            result.stats.nodes_visited,
            result.stats.nodes_pruned,
            result.stats.elapsed,
        );

        self.last_stats = Some(result.stats.clone());
        Ok(result)
    }

    /// Statistics of the most recent search, if any.
    ///
    /// Diagnostic only; never required for correct operation.
    #[must_use]
    pub fn last_search_statistics(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    #[test]
    fn test_choose_move_returns_legal_move() {
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(8, 8), Stone::White);
        board.place(Pos::new(6, 7), Stone::Black);

        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let mut engine = AIEngine::new();
            let mov = engine.choose_move(&board, Stone::White, difficulty).unwrap();
            assert!(board.is_empty(mov), "{difficulty:?} returned an occupied cell");
        }
    }

    #[test]
    fn test_choose_move_leaves_board_untouched() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(9, 9), Stone::White);
        let snapshot = board.clone();

        let _ = engine.choose_move(&board, Stone::Black, Difficulty::Easy).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_choose_move_on_full_board_fails() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(Pos::from_index(idx), stone);
        }

        assert_eq!(
            engine.choose_move(&board, Stone::Black, Difficulty::Easy),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_statistics_available_after_move() {
        let mut engine = AIEngine::new();
        assert!(engine.last_search_statistics().is_none());

        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        let _ = engine.choose_move(&board, Stone::White, Difficulty::Easy).unwrap();

        let stats = engine.last_search_statistics().unwrap();
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black);
        board.place(Pos::new(7, 8), Stone::White);

        let first = engine.choose_move(&board, Stone::Black, Difficulty::Easy).unwrap();
        let second = engine.choose_move(&board, Stone::Black, Difficulty::Easy).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_ingestion_and_move() {
        let mut rows = vec![vec![Stone::Empty; 15]; 15];
        rows[7][7] = Stone::Black;
        rows[7][8] = Stone::White;
        let board = Board::from_grid(&rows).unwrap();

        let mut engine = AIEngine::new();
        let mov = engine.choose_move(&board, Stone::Black, Difficulty::Easy).unwrap();
        assert!(board.is_empty(mov));
    }
}
