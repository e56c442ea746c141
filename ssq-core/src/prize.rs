use crate::Combination;
use serde::Serialize;
use std::fmt;

/// Prize tiers of the double color ball lottery, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PrizeTier {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
    Sixth = 6,
}

impl PrizeTier {
    /// All tiers from first to sixth
    pub const ALL: [PrizeTier; 6] = [
        PrizeTier::First,
        PrizeTier::Second,
        PrizeTier::Third,
        PrizeTier::Fourth,
        PrizeTier::Fifth,
        PrizeTier::Sixth,
    ];

    /// Tier for a given number of matching red balls and blue match.
    ///
    /// - first: 6 red + blue
    /// - second: 6 red
    /// - third: 5 red + blue
    /// - fourth: 5 red, or 4 red + blue
    /// - fifth: 4 red, or 3 red + blue
    /// - sixth: blue with at most 2 red
    pub fn from_matches(red_hits: usize, blue_hit: bool) -> Option<Self> {
        match (red_hits, blue_hit) {
            (6, true) => Some(PrizeTier::First),
            (6, false) => Some(PrizeTier::Second),
            (5, true) => Some(PrizeTier::Third),
            (5, false) | (4, true) => Some(PrizeTier::Fourth),
            (4, false) | (3, true) => Some(PrizeTier::Fifth),
            (0..=2, true) => Some(PrizeTier::Sixth),
            _ => None,
        }
    }

    /// Tier number, 1 for the top prize
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            PrizeTier::First => "1st prize",
            PrizeTier::Second => "2nd prize",
            PrizeTier::Third => "3rd prize",
            PrizeTier::Fourth => "4th prize",
            PrizeTier::Fifth => "5th prize",
            PrizeTier::Sixth => "6th prize",
        };
        f.write_str(label)
    }
}

/// Score a ticket against the winning draw
pub fn check(ticket: &Combination, draw: &Combination) -> Option<PrizeTier> {
    let (red_hits, blue_hit) = ticket.matches(draw);
    PrizeTier::from_matches(red_hits, blue_hit)
}
