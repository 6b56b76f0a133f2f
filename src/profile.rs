//! Difficulty tiers and their search configuration
//!
//! A closed set of named tiers, each fixing the iterative deepening
//! ceiling, the wall-clock budget per move, and the candidate cap. All
//! three grow monotonically from Easy to Expert; the cap is as much a part
//! of tier strength as the depth. Profiles are pure data: created at
//! configuration time, read-only during a search.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::EngineError;

/// Named difficulty tier.
///
/// Every tier plays deterministically: identical board, color, and tier
/// yield the identical move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Immutable search configuration of one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Iterative deepening ceiling, in plies
    pub max_depth: u8,
    /// Wall-clock budget for one move
    pub time_budget: Duration,
    /// Maximum candidate moves considered per ply
    pub max_candidates: usize,
}

impl Difficulty {
    /// All tiers, weakest to strongest.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Resolve the tier into its search configuration.
    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                name: "easy",
                max_depth: 3,
                time_budget: Duration::from_secs(2),
                max_candidates: 25,
            },
            Difficulty::Medium => DifficultyProfile {
                name: "medium",
                max_depth: 5,
                time_budget: Duration::from_secs(5),
                max_candidates: 45,
            },
            Difficulty::Hard => DifficultyProfile {
                name: "hard",
                max_depth: 7,
                time_budget: Duration::from_secs(8),
                max_candidates: 55,
            },
            Difficulty::Expert => DifficultyProfile {
                name: "expert",
                max_depth: 9,
                time_budget: Duration::from_secs(15),
                max_candidates: 70,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    /// Resolve a configuration-layer name into a tier.
    ///
    /// Unknown names are a configuration error, never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(EngineError::UnknownProfile(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_monotonic_in_every_dimension() {
        for pair in Difficulty::ALL.windows(2) {
            let weaker = pair[0].profile();
            let stronger = pair[1].profile();
            assert!(stronger.max_depth > weaker.max_depth);
            assert!(stronger.time_budget > weaker.time_budget);
            assert!(stronger.max_candidates > weaker.max_candidates);
        }
    }

    #[test]
    fn test_from_str_resolves_all_tiers() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("expert".parse::<Difficulty>().unwrap(), Difficulty::Expert);
    }

    #[test]
    fn test_from_str_rejects_unknown_profile() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, EngineError::UnknownProfile("nightmare".into()));
    }

    #[test]
    fn test_display_round_trips() {
        for difficulty in Difficulty::ALL {
            let name = difficulty.to_string();
            assert_eq!(name.parse::<Difficulty>().unwrap(), difficulty);
        }
    }
}
