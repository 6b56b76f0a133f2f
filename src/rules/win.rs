//! Win condition checking
//!
//! A player wins with five or more stones in a row on any of the four axes
//! (horizontal, vertical, two diagonals). Overlines (6+) also win.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Fast five-in-a-row check through a specific cell.
///
/// Counts consecutive same-color stones outward in both directions along
/// each of the four axes through `pos`. No allocation, bounded ray length;
/// this runs once per explored leaf, so it must never rescan the board.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || board.get(pos) != color {
        return false;
    }
    let sz = BOARD_SIZE as i32;
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        // Positive direction
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
        // Negative direction
        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }
        if count >= WIN_LENGTH as i32 {
            return true;
        }
    }
    false
}

/// Check if there's 5+ in a row anywhere for the given color.
///
/// Iterates all of the color's stones; use [`has_five_at`] when the last
/// placed stone is known.
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    let Some(stones) = board.stones(color) else {
        return false;
    };
    stones.iter_ones().any(|pos| has_five_at(board, pos, color))
}

/// Check for a winner.
///
/// Returns `Some(Stone)` if either color has five in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    for stone in [Stone::Black, Stone::White] {
        if has_five_in_row(board, stone) {
            return Some(stone);
        }
    }
    None
}

/// Full board with no winner
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
