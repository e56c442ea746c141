use clap::{Args, Parser, Subcommand};
use ssq_core::{Combination, GeneratorConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_RECENCY_SPAN};
use ssq_format::{parse_ticket, PrintFormat};

#[derive(Parser)]
#[command(name = "ssq")]
#[command(about = "Double color ball number generator and ticket checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate unique combinations
    Generate(GenerateArgs),
    /// Check tickets read from stdin against a winning draw
    Check(CheckArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of combinations to produce
    #[arg(short = 'n', long = "count", default_value = "5")]
    pub count: usize,

    /// Generation mode: 1 (normal) or 2 (predictive)
    #[arg(short = 'm', long = "mode", default_value = "1")]
    pub mode: u8,

    /// Random seed for generation (defaults to current time)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Output format: oneline, table or json
    #[arg(short = 'f', long = "format", default_value = "oneline")]
    pub format: PrintFormat,

    /// Number of consecutive combinations whose blue balls must all differ
    #[arg(long = "span", default_value_t = DEFAULT_RECENCY_SPAN)]
    pub span: usize,

    /// Rejected draws allowed in a row before giving up
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl GenerateArgs {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            recency_span: self.span,
            max_attempts: self.max_attempts,
        }
    }
}

#[derive(Args)]
pub struct CheckArgs {
    /// Winning draw, e.g. "03 07 12 19 25 31 + 09"
    #[arg(short = 'd', long = "draw", value_parser = parse_ticket)]
    pub draw: Combination,
}
