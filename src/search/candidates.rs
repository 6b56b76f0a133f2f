//! Candidate move generation and ordering
//!
//! Enumerating every empty cell is infeasible beyond shallow depths, so the
//! search only considers empty cells bordering an existing stone (Chebyshev
//! distance 1). Candidates are ordered by a static threat ladder so that
//! alpha-beta meets the strongest moves first; the ordering is what makes
//! pruning effective. The list is truncated to the difficulty profile's
//! candidate cap, a deliberate strength/speed trade-off between tiers.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Generate an ordered, size-bounded candidate list for the side to move.
///
/// An empty board seeds with the center intersection. Ties in the ordering
/// score break by board index, keeping the result fully deterministic. A
/// cap of zero fails open to the single best candidate. An empty return
/// means the board is full.
#[must_use]
pub fn generate(board: &Board, to_move: Stone, cap: usize) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut scored: Vec<(Pos, i32)> = Vec::with_capacity(64);

    for pos in board.black.iter_ones().chain(board.white.iter_ones()) {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(neighbor) =
                    Pos::try_new(i32::from(pos.row) + dr, i32::from(pos.col) + dc)
                else {
                    continue;
                };
                if seen[neighbor.row as usize][neighbor.col as usize] {
                    continue;
                }
                seen[neighbor.row as usize][neighbor.col as usize] = true;

                if board.is_empty(neighbor) {
                    scored.push((neighbor, score_candidate(board, neighbor, to_move)));
                }
            }
        }
    }

    scored.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(cap.max(1));
    scored.into_iter().map(|(pos, _)| pos).collect()
}

/// Static ordering score for placing `color` at the empty cell `pos`.
///
/// A priority ladder over the formations the move would create and the
/// opponent formations it would spoil: completing five, then blocking the
/// opponent's five, then making or blocking fours and forks, down through
/// threes. Quiet moves fall through to positional terms (center distance,
/// adjacency to friendly stones, developing directions).
pub(crate) fn score_candidate(board: &Board, pos: Pos, color: Stone) -> i32 {
    let opponent = color.opponent();
    let dirs: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

    let mut my_five = false;
    let mut opp_five = false;
    let mut my_open_fours = 0i32;
    let mut opp_open_fours = 0i32;
    let mut my_closed_fours = 0i32;
    let mut opp_closed_fours = 0i32;
    let mut my_open_threes = 0i32;
    let mut opp_open_threes = 0i32;
    let mut quiet_score = 0i32;
    let mut my_developing_dirs = 0i32;
    let mut opp_developing_dirs = 0i32;

    for (dr, dc) in dirs {
        let (mc, mo) = count_line(board, pos, dr, dc, color);
        let (oc, oo) = count_line(board, pos, dr, dc, opponent);

        if mc >= 5 {
            my_five = true;
        }
        if oc >= 5 {
            opp_five = true;
        }
        if mc == 4 {
            if mo == 2 {
                my_open_fours += 1;
            } else if mo == 1 {
                my_closed_fours += 1;
            }
        }
        if oc == 4 {
            if oo == 2 {
                opp_open_fours += 1;
            } else if oo == 1 {
                opp_closed_fours += 1;
            }
        }
        if mc == 3 && mo == 2 {
            my_open_threes += 1;
        }
        if oc == 3 && oo == 2 {
            opp_open_threes += 1;
        }
        if mc == 2 {
            quiet_score += if mo == 2 { 500 } else if mo == 1 { 150 } else { 0 };
        }
        if oc == 2 && oo == 2 {
            quiet_score += 200;
        }

        // "Developing" = 2+ stones in line with room to grow
        if mc >= 2 && mo >= 1 {
            my_developing_dirs += 1;
        }
        if oc >= 2 && oo >= 1 {
            opp_developing_dirs += 1;
        }
    }

    let my_fours = my_open_fours + my_closed_fours;
    let opp_fours = opp_open_fours + opp_closed_fours;

    // === Priority ladder ===
    // Immediate completions first, ours before theirs.
    if my_five {
        return 900_000;
    }
    if opp_five {
        return 895_000;
    }

    // Forks: a single stone creating threats the opponent cannot all answer
    if my_fours >= 2 {
        return 880_000;
    }
    if my_fours >= 1 && my_open_threes >= 1 {
        return 878_000;
    }
    if my_open_fours >= 1 {
        return 870_000;
    }

    if opp_fours >= 2 {
        return 868_000;
    }
    if opp_fours >= 1 && opp_open_threes >= 1 {
        return 866_000;
    }
    if opp_open_fours >= 1 {
        return 860_000;
    }

    if my_open_threes >= 2 {
        return 840_000;
    }
    if opp_open_threes >= 2 {
        return 838_000;
    }

    // Single forcing threats
    if my_closed_fours >= 1 {
        return 830_000;
    }
    if opp_closed_fours >= 1 {
        return 820_000;
    }
    if my_open_threes >= 1 {
        return 810_000;
    }
    if opp_open_threes >= 1 {
        return 800_000;
    }

    // Quiet move: positional terms only
    let center = (BOARD_SIZE / 2) as i32;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    let center_bonus = (2 * center - dist) * 25;

    let mut proximity = 0i32;
    for (dr, dc) in dirs {
        for sign in [-1, 1] {
            if let Some(p) =
                Pos::try_new(i32::from(pos.row) + dr * sign, i32::from(pos.col) + dc * sign)
            {
                if board.get(p) == color {
                    proximity += 200;
                }
            }
        }
    }

    let development_bonus = match my_developing_dirs {
        0..=1 => 0,
        2 => 50_000,
        _ => 100_000,
    };
    let disruption_bonus = match opp_developing_dirs {
        0..=1 => 0,
        2 => 30_000,
        _ => 80_000,
    };

    center_bonus + proximity + quiet_score + development_bonus + disruption_bonus
}

/// Count the run that placing `color` at `pos` would produce along one
/// axis: stones contiguous with the cell in both directions plus the cell
/// itself, and how many of the run's two ends are free.
fn count_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (i32, i32) {
    let mut count = 1;
    let mut open_ends = 0;

    for sign in [1, -1] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while let Some(p) = Pos::try_new(r, c) {
            if board.get(p) != color {
                break;
            }
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
        if Pos::try_new(r, c).is_some_and(|p| board.get(p) == Stone::Empty) {
            open_ends += 1;
        }
    }

    (count, open_ends)
}
