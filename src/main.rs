//! Command-line driver for Bulgarian Solitaire.
//!
//! Builds a board (random, or read from stdin with `-u`), then plays rounds
//! until the terminal configuration, printing each one. With `-s` it waits
//! for Enter between rounds.

use std::io::{self, BufRead, Write};

use clap::Parser;
use flexi_logger::Logger;

use bulgarian_solitaire::{
    Board, GameRng, Outcome, Simulation, SolitaireError, CARD_TOTAL, DEFAULT_ROUND_LIMIT,
};

const ENTER_PROMPT: &str =
    "Please enter a space-separated list of positive integers followed by newline:";

#[derive(Parser, Debug)]
#[command(name = "bulgarian-solitaire", about = "Bulgarian Solitaire simulator")]
struct Cli {
    /// Prompt for the initial configuration instead of generating one
    #[arg(short = 'u', long = "user-config")]
    user_config: bool,

    /// Wait for Enter after every round
    #[arg(short = 's', long = "single-step")]
    single_step: bool,

    /// Seed for the random initial configuration (default: from entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many rounds
    #[arg(long, default_value_t = DEFAULT_ROUND_LIMIT)]
    max_rounds: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let board = if cli.user_config {
        read_board(&mut input, &mut out)?
    } else {
        random_board(cli.seed, &mut out)?
    };

    let outcome = play(board, cli.single_step, cli.max_rounds, &mut input, &mut out)?;
    log::info!("finished: {outcome:?}");
    Ok(())
}

/// Prompt until a valid configuration line is entered.
fn read_board<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Board, SolitaireError> {
    writeln!(out, "Number of total cards is {CARD_TOTAL}")?;
    writeln!(
        out,
        "You will be entering the initial configuration of the cards (i.e., how many in each pile)."
    )?;
    writeln!(out, "{ENTER_PROMPT}")?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid configuration was entered",
            )
            .into());
        }

        match Board::from_config(&line) {
            Ok(board) => return Ok(board),
            Err(err) => {
                log::debug!("rejected {:?}: {err}", line.trim_end());
                writeln!(
                    out,
                    "ERROR: Each pile must have at least one card and the total number of cards must be {CARD_TOTAL}"
                )?;
                writeln!(out, "{ENTER_PROMPT}")?;
            }
        }
    }
}

/// Generate a random board, printing the seed so the run can be repeated
/// with `--seed`.
fn random_board<W: Write>(seed: Option<u64>, out: &mut W) -> Result<Board, SolitaireError> {
    let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
    writeln!(out, "Random seed: {}", rng.seed())?;
    Ok(Board::random(&mut rng))
}

/// Play to the terminal configuration, printing every round.
fn play<R: BufRead, W: Write>(
    board: Board,
    single_step: bool,
    max_rounds: u32,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome, SolitaireError> {
    writeln!(out, "Initial configuration: {board}")?;

    let mut sim = Simulation::new(board).with_round_limit(max_rounds);
    let outcome = sim.try_run_with(|round, board| -> Result<(), SolitaireError> {
        writeln!(out, "[{round}] Current configuration: {board}")?;
        if single_step {
            write!(out, "<Type return to continue>")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }
        Ok(())
    })?;

    match outcome {
        Outcome::Terminal { .. } => writeln!(out, "Done!")?,
        Outcome::RoundLimit { rounds } => writeln!(out, "Stopped after {rounds} rounds.")?,
    }
    Ok(outcome)
}
