/// Lowest red ball number
pub const RED_MIN: u8 = 1;
/// Highest red ball number
pub const RED_MAX: u8 = 33;
/// Number of red balls in one combination
pub const RED_COUNT: usize = 6;
/// Lowest blue ball number
pub const BLUE_MIN: u8 = 1;
/// Highest blue ball number
pub const BLUE_MAX: u8 = 16;

/// Error for a set of balls that cannot form a combination
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BallError {
    #[error("expected 6 red balls, got {0}")]
    WrongRedCount(usize),

    #[error("red ball {0} is outside 1-33")]
    RedOutOfRange(u8),

    #[error("red ball {0} appears more than once")]
    DuplicateRed(u8),

    #[error("blue ball {0} is outside 1-16")]
    BlueOutOfRange(u8),
}

/// Check whether a number is a valid red ball
pub fn is_red(number: u8) -> bool {
    (RED_MIN..=RED_MAX).contains(&number)
}

/// Check whether a number is a valid blue ball
pub fn is_blue(number: u8) -> bool {
    (BLUE_MIN..=BLUE_MAX).contains(&number)
}
