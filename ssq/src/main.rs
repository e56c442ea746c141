mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CheckArgs, Cli, Command, GenerateArgs};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ssq_core::{Combination, Generator, Mode, PrizeTier};
use ssq_format::{format_all, format_oneline, parse_ticket};
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Check(args) => run_check(&args),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    // Use provided seed or default to current time (microsecond resolution)
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_micros() as u64)
            .unwrap_or_default()
    });

    let produced = write_generated(args, seed, &mut io::stdout().lock())?;

    // Print statistics to stderr so the seed can be replayed
    eprintln!("Generated {} combinations (seed {})", produced, seed);
    Ok(())
}

/// Generate combinations for `args` and write them to `out`.
/// Nothing is written unless the whole batch was produced.
fn write_generated<W: Write>(args: &GenerateArgs, seed: u64, out: &mut W) -> Result<usize> {
    let mode = Mode::try_from(args.mode)?;
    info!(seed, count = args.count, mode = mode.code(), span = args.span, "generating");

    let mut generator = Generator::new(args.config(), StdRng::seed_from_u64(seed))?;
    let combos = generator.generate(args.count, mode)?;

    let output = format_all(&combos, args.format)?;
    out.write_all(output.as_bytes())
        .context("failed to write combinations")?;
    Ok(combos.len())
}

fn run_check(args: &CheckArgs) -> Result<()> {
    info!(draw = %format_oneline(&args.draw), "checking tickets");

    let (checked, winning) =
        check_tickets(&args.draw, io::stdin().lock(), &mut io::stdout().lock())?;

    eprintln!("{}", check_summary(checked, winning));
    Ok(())
}

/// Score every ticket line of `input` against `draw`, writing one result
/// line per ticket. Returns (tickets checked, winning tickets).
fn check_tickets<R: BufRead, W: Write>(
    draw: &Combination,
    input: R,
    out: &mut W,
) -> Result<(usize, usize)> {
    let mut checked = 0usize;
    let mut winning = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read tickets")?;
        let trimmed = line.trim();

        // Skip blank lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let ticket =
            parse_ticket(trimmed).with_context(|| format!("bad ticket on line {}", index + 1))?;
        let (red_hits, blue_hit) = ticket.matches(draw);
        debug!(line = index + 1, red_hits, blue_hit, "checked ticket");

        checked += 1;
        match PrizeTier::from_matches(red_hits, blue_hit) {
            Some(tier) => {
                winning += 1;
                writeln!(out, "{}  {}", format_oneline(&ticket), tier)?;
            }
            None => writeln!(out, "{}  -", format_oneline(&ticket))?,
        }
    }

    Ok((checked, winning))
}

fn check_summary(checked: usize, winning: usize) -> String {
    format!("Checked {} tickets, {} winning", checked, winning)
}
