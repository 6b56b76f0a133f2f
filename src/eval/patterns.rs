//! Pattern scores for position evaluation
//!
//! These constants define the scoring weights for board patterns. The
//! absolute values are tunable; the ordering
//! five > open four > closed four > open three > closed three >
//! open two > closed two > single
//! is the invariant the rest of the engine relies on.

/// Scores for runs of stones already on the board
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - win, and the saturating sentinel for won positions
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_ (two ways to complete, unstoppable)
    pub const OPEN_FOUR: i32 = 100_000;
    /// Closed four: XOOOO_ or _OOOOX (one way to complete)
    pub const CLOSED_FOUR: i32 = 50_000;

    /// Open three: _OOO_ (becomes an open four if not blocked)
    pub const OPEN_THREE: i32 = 10_000;
    /// Closed three: XOOO_ or _OOOX (one side blocked)
    pub const CLOSED_THREE: i32 = 1_500;

    /// Open two: _OO_ (room to grow on both sides)
    pub const OPEN_TWO: i32 = 1_000;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 200;

    /// Lone stone with room on both sides
    pub const SINGLE: i32 = 50;
}

/// Scores for an empty cell, by the formation placing a stone there would
/// create. Kept an order of magnitude below the equivalent on-board pattern
/// so an actual threat always outranks a prospective one.
pub struct PlacementScore;

impl PlacementScore {
    /// Placing here completes five or more
    pub const COMPLETES_FIVE: i32 = 30_000;

    /// Would join three free stones into an unblocked four
    pub const MAKES_OPEN_FOUR: i32 = 8_000;
    /// Would make a four with one side blocked
    pub const MAKES_CLOSED_FOUR: i32 = 2_000;

    /// Would make an unblocked three
    pub const MAKES_OPEN_THREE: i32 = 1_200;
    /// Would make a three with one side blocked
    pub const MAKES_CLOSED_THREE: i32 = 300;

    /// Would make an unblocked two
    pub const MAKES_OPEN_TWO: i32 = 100;
    /// Would make a two with one side blocked
    pub const MAKES_CLOSED_TWO: i32 = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        // Verify the score ordering invariant
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
        assert!(PatternScore::CLOSED_TWO > PatternScore::SINGLE);
        assert!(PatternScore::SINGLE > 0);
    }

    #[test]
    fn test_placement_score_hierarchy() {
        assert!(PlacementScore::COMPLETES_FIVE > PlacementScore::MAKES_OPEN_FOUR);
        assert!(PlacementScore::MAKES_OPEN_FOUR > PlacementScore::MAKES_CLOSED_FOUR);
        assert!(PlacementScore::MAKES_CLOSED_FOUR > PlacementScore::MAKES_OPEN_THREE);
        assert!(PlacementScore::MAKES_OPEN_THREE > PlacementScore::MAKES_CLOSED_THREE);
        assert!(PlacementScore::MAKES_CLOSED_THREE > PlacementScore::MAKES_OPEN_TWO);
        assert!(PlacementScore::MAKES_OPEN_TWO > PlacementScore::MAKES_CLOSED_TWO);
    }

    #[test]
    fn test_placement_below_matching_pattern() {
        // A prospective formation must never outrank the real one.
        assert!(PlacementScore::MAKES_OPEN_FOUR < PatternScore::OPEN_FOUR);
        assert!(PlacementScore::MAKES_OPEN_THREE < PatternScore::OPEN_THREE);
        assert!(PlacementScore::COMPLETES_FIVE < PatternScore::FIVE);
    }
}
