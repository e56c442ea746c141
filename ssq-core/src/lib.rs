mod ball;
mod combination;
mod generator;
mod prize;
mod window;

pub use ball::{is_blue, is_red, BallError, BLUE_MAX, BLUE_MIN, RED_COUNT, RED_MAX, RED_MIN};
pub use combination::Combination;
pub use generator::{
    draw_combination, generate, GenerateError, Generator, GeneratorConfig, Mode,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RECENCY_SPAN, MAX_COMBINATIONS,
};
pub use prize::{check, PrizeTier};
pub use window::BlueWindow;
