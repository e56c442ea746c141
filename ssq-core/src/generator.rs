//! Deduplicating number generator.
//!
//! Combinations are drawn uniformly and kept only if they pass two checks
//! against what the current call has already produced:
//!
//! - the exact (red set, blue ball) pair has not been produced before;
//! - the blue ball does not repeat within any run of `recency_span`
//!   consecutive combinations.
//!
//! All bookkeeping lives inside a single call. The random source is always
//! passed in by the caller, so a seeded generator reproduces its output.

use crate::ball::{BLUE_MAX, BLUE_MIN, RED_COUNT, RED_MAX, RED_MIN};
use crate::window::BlueWindow;
use crate::Combination;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Default width of the run of consecutive combinations with distinct blue balls
pub const DEFAULT_RECENCY_SPAN: usize = 16;

/// Default limit on consecutive rejected draws before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Number of distinct (red set, blue ball) pairs: C(33, 6) * 16
pub const MAX_COMBINATIONS: usize = 1_107_568 * 16;

/// Upper bound on the up-front allocation for a call's results
const PREALLOCATE_LIMIT: usize = 1024;

/// Generation mode selector.
///
/// Both modes currently run the same algorithm; `Predictive` is reserved
/// for a future strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Normal = 1,
    Predictive = 2,
}

impl Mode {
    /// Numeric selector (1 or 2)
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = GenerateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Mode::Normal),
            2 => Ok(Mode::Predictive),
            other => Err(GenerateError::InvalidMode(other)),
        }
    }
}

/// Generation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid mode {0}: expected 1 (normal) or 2 (predictive)")]
    InvalidMode(u8),

    #[error("cannot produce {requested} unique combinations, at most {max} exist")]
    InvalidCount { requested: usize, max: usize },

    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },

    #[error(
        "generation exhausted after {attempts} consecutive rejected draws \
         ({produced} of {requested} combinations produced)"
    )]
    GenerationExhausted {
        produced: usize,
        requested: usize,
        attempts: u32,
    },
}

/// Tunables for the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Any `recency_span` consecutive combinations carry distinct blue balls.
    /// Must be between 1 and 16; the window remembers `recency_span - 1`
    /// previous blue balls.
    pub recency_span: usize,
    /// Limit on consecutive rejected draws while looking for the next
    /// combination: the `max_attempts`-th rejection in a row fails the
    /// call. Must be at least 1.
    pub max_attempts: u32,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerateError> {
        let blue_count = usize::from(BLUE_MAX - BLUE_MIN + 1);
        if self.recency_span == 0 || self.recency_span > blue_count {
            return Err(GenerateError::InvalidConfig {
                reason: format!(
                    "recency span must be between 1 and {}, got {}",
                    blue_count, self.recency_span
                ),
            });
        }
        if self.max_attempts == 0 {
            return Err(GenerateError::InvalidConfig {
                reason: "max attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn window_capacity(&self) -> usize {
        self.recency_span - 1
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            recency_span: DEFAULT_RECENCY_SPAN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generator owning its random source.
///
/// Each call to [`Generator::generate`] starts with an empty window and
/// seen-set; only the random source carries over between calls.
pub struct Generator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator with the default config and a seeded `StdRng`
    pub fn seeded(seed: u64) -> Self {
        Generator {
            config: GeneratorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Generator { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce `count` unique combinations
    pub fn generate(&mut self, count: usize, mode: Mode) -> Result<Vec<Combination>, GenerateError> {
        match mode {
            Mode::Normal | Mode::Predictive => generate_unique(&mut self.rng, &self.config, count),
        }
    }

    /// Same as [`Generator::generate`] with a numeric mode selector
    pub fn generate_with_code(
        &mut self,
        count: usize,
        mode: u8,
    ) -> Result<Vec<Combination>, GenerateError> {
        let mode = Mode::try_from(mode)?;
        self.generate(count, mode)
    }

    /// Give back the random source
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Produce `count` unique combinations with the default config.
///
/// `mode` must be 1 or 2 and `count` at most [`MAX_COMBINATIONS`]; anything
/// else fails before a single draw is made.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    mode: u8,
) -> Result<Vec<Combination>, GenerateError> {
    match Mode::try_from(mode)? {
        Mode::Normal | Mode::Predictive => {
            generate_unique(rng, &GeneratorConfig::default(), count)
        }
    }
}

/// Draw one combination with no deduplication: 6 distinct reds sampled
/// without replacement and an independent blue ball.
pub fn draw_combination<R: Rng + ?Sized>(rng: &mut R) -> Combination {
    let mut reds = [0u8; RED_COUNT];
    let picks = index::sample(rng, usize::from(RED_MAX - RED_MIN + 1), RED_COUNT);
    for (slot, pick) in reds.iter_mut().zip(picks.iter()) {
        *slot = RED_MIN + pick as u8;
    }
    let blue = rng.random_range(BLUE_MIN..=BLUE_MAX);
    Combination::from_draw(reds, blue)
}

fn generate_unique<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    count: usize,
) -> Result<Vec<Combination>, GenerateError> {
    if count > MAX_COMBINATIONS {
        return Err(GenerateError::InvalidCount {
            requested: count,
            max: MAX_COMBINATIONS,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut produced = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
    let mut seen: FxHashSet<Combination> = FxHashSet::default();
    let mut window = BlueWindow::new(config.window_capacity());

    let mut rejected_in_a_row = 0u32;
    let mut duplicate_rejections = 0u64;
    let mut window_rejections = 0u64;

    while produced.len() < count {
        let candidate = draw_combination(rng);

        let rejected = if seen.contains(&candidate) {
            duplicate_rejections += 1;
            true
        } else if window.contains(candidate.blue_number()) {
            window_rejections += 1;
            true
        } else {
            false
        };

        if rejected {
            rejected_in_a_row += 1;
            if rejected_in_a_row >= config.max_attempts {
                debug!(
                    produced = produced.len(),
                    requested = count,
                    "giving up on generation"
                );
                return Err(GenerateError::GenerationExhausted {
                    produced: produced.len(),
                    requested: count,
                    attempts: rejected_in_a_row,
                });
            }
            continue;
        }

        rejected_in_a_row = 0;
        seen.insert(candidate);
        window.push(candidate.blue_number());
        produced.push(candidate);
    }

    debug!(
        count,
        duplicate_rejections, window_rejections, "generated combinations"
    );

    Ok(produced)
}
