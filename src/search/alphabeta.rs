//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! The driver walks depths 1..=ceiling, carrying the previous depth's best
//! move to the front of the root list for better pruning, and stops when
//! the depth ceiling or the wall-clock budget of the active difficulty
//! profile is exhausted. A pass interrupted by the budget is discarded;
//! the move returned always comes from the deepest fully completed pass.
//!
//! The search mutates a private clone of the caller's board through a
//! scope-guarded place/retract helper, so no exit path (pruning breaks
//! and budget aborts included) can leak a stone onto the input position.
//!
//! # Example
//!
//! ```
//! use gomoku_ai::board::{Board, Pos, Stone};
//! use gomoku_ai::profile::Difficulty;
//! use gomoku_ai::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::center(), Stone::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher
//!     .search(&board, Stone::White, &Difficulty::Easy.profile())
//!     .unwrap();
//! println!("White plays ({}, {})", result.best_move.row, result.best_move.col);
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::eval::{evaluate, PatternScore};
use crate::profile::DifficultyProfile;
use crate::rules::has_five_at;

use super::candidates;

/// Infinity for alpha-beta bounds, outside every reachable score
const INF: i32 = PatternScore::FIVE + 1;

/// Scores at or above this are forced wins (mate-distance shading keeps
/// them within 100 of the sentinel for any reachable depth)
const WIN_THRESHOLD: i32 = PatternScore::FIVE - 100;

/// A branch with no candidate left (board full) scores as a draw
const DRAW_SCORE: i32 = 0;

/// Nodes between clock polls inside a deepening pass
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Counters accumulated across one search invocation.
///
/// Reset at the start of every [`Searcher::search`] call and returned by
/// value with the result, never shared across searches.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Nodes entered, all plies
    pub nodes_visited: u64,
    /// Early sibling cutoffs from alpha-beta
    pub nodes_pruned: u64,
    /// Deepest ply entered
    pub max_depth_reached: u8,
    /// Nodes entered per ply, index 0 = root
    pub nodes_per_depth: Vec<u64>,
    /// Wall-clock time of the whole invocation
    pub elapsed: Duration,
}

/// Search outcome: the chosen move plus diagnostics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move from the deepest completed pass
    pub best_move: Pos,
    /// Score of the best move, from the searching player's perspective
    pub score: i32,
    /// Deepest fully completed depth
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Iterative deepening minimax searcher.
///
/// Owns no board state of its own; each [`Searcher::search`] call works on
/// a private clone of the position it is given. Not meant to be shared
/// across threads; a caller wanting a responsive UI dispatches the whole
/// call to a worker and delivers the result back asynchronously.
pub struct Searcher {
    root_color: Stone,
    candidate_cap: usize,
    start: Instant,
    budget: Duration,
    /// Depth-1 passes run with the clock ignored so even a tiny budget
    /// still produces a legal move.
    enforce_budget: bool,
    aborted: bool,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_color: Stone::Black,
            candidate_cap: 1,
            start: Instant::now(),
            budget: Duration::ZERO,
            enforce_budget: false,
            aborted: false,
            stats: SearchStats::default(),
        }
    }

    /// Search for the best move under the given difficulty profile.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMoves`] when the board has no empty cell.
    /// Running out of time is not an error; the deepest completed pass
    /// supplies the result.
    pub fn search(
        &mut self,
        board: &Board,
        color: Stone,
        profile: &DifficultyProfile,
    ) -> Result<SearchResult, EngineError> {
        self.root_color = color;
        self.candidate_cap = profile.max_candidates;
        self.start = Instant::now();
        self.budget = profile.time_budget;
        self.aborted = false;
        self.stats = SearchStats {
            nodes_per_depth: vec![0; usize::from(profile.max_depth) + 1],
            ..SearchStats::default()
        };

        let mut work_board = board.clone();
        let mut root_moves = candidates::generate(&work_board, color, profile.max_candidates);
        if root_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut best: Option<(Pos, i32, u8)> = None;

        for depth in 1..=profile.max_depth {
            self.enforce_budget = depth > 1;
            if self.enforce_budget && self.start.elapsed() >= self.budget {
                debug!("time budget exhausted before depth {depth}");
                break;
            }

            let Some((mov, score)) = self.search_root(&mut work_board, depth, &root_moves) else {
                debug!("depth {depth} pass aborted, keeping previous result");
                break;
            };

            best = Some((mov, score, depth));
            debug!(
                "depth {depth} complete: best ({}, {}) score {score} nodes {}",
                mov.row, mov.col, self.stats.nodes_visited
            );

            // Move-ordering carry-over: explore last pass's best move first
            if let Some(idx) = root_moves.iter().position(|&m| m == mov) {
                root_moves.remove(idx);
                root_moves.insert(0, mov);
            }

            if score >= WIN_THRESHOLD {
                debug!("forced win found at depth {depth}");
                break;
            }
        }

        self.stats.elapsed = self.start.elapsed();

        // The depth-1 pass runs with the clock ignored, so a best move
        // always exists by this point.
        let Some((best_move, score, depth)) = best else {
            return Err(EngineError::NoLegalMoves);
        };

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats.clone(),
        })
    }

    /// One full-width pass over the ordered root moves.
    ///
    /// Returns `None` when the budget expired mid-pass; a partial pass may
    /// be based on incomplete evaluation and is never trusted.
    fn search_root(&mut self, board: &mut Board, depth: u8, moves: &[Pos]) -> Option<(Pos, i32)> {
        let color = self.root_color;
        let mut alpha = -INF;
        let mut best: Option<(Pos, i32)> = None;

        self.visit_node(0);

        for &mov in moves {
            let score = with_stone(board, mov, color, |b| {
                if has_five_at(b, mov, color) {
                    PatternScore::FIVE - 1
                } else {
                    self.minimax(b, depth - 1, 1, alpha, INF, false)
                }
            });

            if self.aborted {
                return None;
            }

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mov, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// One function parameterized by the maximizing flag so the alpha/beta
    /// threading stays in one place. `ply` counts stones placed since the
    /// root position; scores are always from the root player's perspective.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth_left: u8,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.visit_node(ply);
        if self.check_time() {
            // Score is discarded once aborted; unwind quickly
            return DRAW_SCORE;
        }

        if depth_left == 0 {
            return evaluate(board, self.root_color);
        }

        let to_move = if maximizing {
            self.root_color
        } else {
            self.root_color.opponent()
        };

        let moves = candidates::generate(board, to_move, self.candidate_cap);
        if moves.is_empty() {
            return DRAW_SCORE;
        }

        // Wins shade by distance: stone number ply+1 completing five scores
        // FIVE - (ply + 1), so faster wins and slower losses are preferred.
        let win_score = PatternScore::FIVE - i32::from(ply) - 1;

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                let score = with_stone(board, mov, to_move, |b| {
                    if has_five_at(b, mov, to_move) {
                        win_score
                    } else {
                        self.minimax(b, depth_left - 1, ply + 1, alpha, beta, false)
                    }
                });
                if self.aborted {
                    return best;
                }
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.nodes_pruned += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                let score = with_stone(board, mov, to_move, |b| {
                    if has_five_at(b, mov, to_move) {
                        -win_score
                    } else {
                        self.minimax(b, depth_left - 1, ply + 1, alpha, beta, true)
                    }
                });
                if self.aborted {
                    return best;
                }
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.nodes_pruned += 1;
                    break;
                }
            }
            best
        }
    }

    #[inline]
    fn visit_node(&mut self, ply: u8) {
        self.stats.nodes_visited += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(ply);
        if let Some(count) = self.stats.nodes_per_depth.get_mut(usize::from(ply)) {
            *count += 1;
        }
    }

    /// Poll the clock every `TIME_CHECK_INTERVAL` nodes; sets the abort
    /// flag once the budget is gone. Cancellation is cooperative and
    /// coarse; there is no harder preemption guarantee.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        if !self.enforce_budget {
            return false;
        }
        if self.stats.nodes_visited % TIME_CHECK_INTERVAL == 0
            && self.start.elapsed() >= self.budget
        {
            self.aborted = true;
        }
        self.aborted
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped mutation: place a stone, run `f`, retract on every exit path.
///
/// Keeps the place/retract stack discipline in one spot instead of manual
/// cleanup before each return.
fn with_stone<T>(board: &mut Board, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> T) -> T {
    let placed = board.place(pos, stone);
    debug_assert!(placed, "candidate cell must be empty");
    let out = f(board);
    board.retract(pos);
    out
}
