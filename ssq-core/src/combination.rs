use crate::ball::{is_blue, is_red, BallError, RED_COUNT};
use serde::{Deserialize, Serialize};

/// One double color ball entry: six distinct red balls and one blue ball.
///
/// The red balls are always held in ascending order, so two combinations
/// compare equal exactly when they hold the same red set and blue ball,
/// whatever order the reds were drawn or typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CombinationRepr")]
pub struct Combination {
    red_numbers: [u8; RED_COUNT],
    blue_number: u8,
}

impl Combination {
    /// Build a combination from red balls in any order and a blue ball.
    ///
    /// Returns an error if there are not exactly 6 reds, if any ball is out
    /// of range, or if a red ball is repeated.
    pub fn new(reds: &[u8], blue: u8) -> Result<Self, BallError> {
        if reds.len() != RED_COUNT {
            return Err(BallError::WrongRedCount(reds.len()));
        }

        let mut red_numbers = [0u8; RED_COUNT];
        red_numbers.copy_from_slice(reds);
        red_numbers.sort_unstable();

        if let Some(&red) = red_numbers.iter().find(|&&r| !is_red(r)) {
            return Err(BallError::RedOutOfRange(red));
        }
        if let Some(pair) = red_numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(BallError::DuplicateRed(pair[0]));
        }
        if !is_blue(blue) {
            return Err(BallError::BlueOutOfRange(blue));
        }

        Ok(Combination {
            red_numbers,
            blue_number: blue,
        })
    }

    /// Build from a red draw already known to be distinct and in range.
    pub(crate) fn from_draw(mut red_numbers: [u8; RED_COUNT], blue_number: u8) -> Self {
        red_numbers.sort_unstable();
        debug_assert!(red_numbers.iter().all(|&r| is_red(r)));
        debug_assert!(red_numbers.windows(2).all(|pair| pair[0] < pair[1]));
        debug_assert!(is_blue(blue_number));
        Combination {
            red_numbers,
            blue_number,
        }
    }

    /// Red balls in ascending order
    pub fn red_numbers(&self) -> &[u8; RED_COUNT] {
        &self.red_numbers
    }

    pub fn blue_number(&self) -> u8 {
        self.blue_number
    }

    /// Check whether a red ball is part of this combination
    pub fn contains_red(&self, number: u8) -> bool {
        self.red_numbers.binary_search(&number).is_ok()
    }

    /// Compare against a draw: number of red balls in common and whether
    /// the blue ball matches.
    pub fn matches(&self, draw: &Combination) -> (usize, bool) {
        let red_hits = self
            .red_numbers
            .iter()
            .filter(|&&r| draw.contains_red(r))
            .count();
        (red_hits, self.blue_number == draw.blue_number)
    }
}

#[derive(Deserialize)]
struct CombinationRepr {
    red_numbers: Vec<u8>,
    blue_number: u8,
}

impl TryFrom<CombinationRepr> for Combination {
    type Error = BallError;

    fn try_from(repr: CombinationRepr) -> Result<Self, Self::Error> {
        Combination::new(&repr.red_numbers, repr.blue_number)
    }
}
