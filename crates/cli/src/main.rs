// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Set card game CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    io::{self, Write},
    time::Instant,
};

use setgame_engine::{Board, BoardConfig, Card, Deck, Triple, complete, count_sets, deal};

pub mod game;
pub mod terminal;

#[derive(Debug, Parser)]
#[command(version, about = "Deal and play Set card game boards.")]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal a board and print its sets.
    Deal {
        #[command(flatten)]
        board: BoardArgs,
        /// Print the board ids and sets as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Play a board in the terminal.
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Check if three cards make a set.
    Check {
        /// Cards as number, colour, shading and shape, e.g. 1RFD 2GOP 3PSS.
        #[clap(num_args = 3, required = true)]
        cards: Vec<Card>,
    },
    /// Print the card that makes a set with two cards.
    Complete {
        /// Cards as number, colour, shading and shape, e.g. 1RFD 2GOP.
        #[clap(num_args = 2, required = true)]
        cards: Vec<Card>,
    },
    /// Print the distribution of sets in random hands.
    Stats {
        /// Random seed.
        #[clap(long)]
        seed: Option<u64>,
        /// Number of random hands.
        #[clap(long, default_value_t = 100_000)]
        samples: usize,
        /// Number of cards in a hand.
        #[clap(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(0..=81))]
        size: u8,
    },
}

#[derive(Debug, Args)]
struct BoardArgs {
    /// Random seed for a reproducible board.
    #[clap(long)]
    seed: Option<u64>,
    /// Number of cards on the board.
    #[clap(long, default_value_t = 12, value_parser = clap::value_parser!(u8).range(0..=81))]
    size: u8,
    /// Number of sets on the board.
    #[clap(long, default_value_t = 6)]
    sets: usize,
    /// Attempts before giving up.
    #[clap(long, default_value_t = BoardConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

impl BoardArgs {
    fn deal(&self) -> Result<Board> {
        let config = BoardConfig {
            size: self.size as usize,
            sets: self.sets,
            max_attempts: self.max_attempts,
        };

        let mut rng = new_rng(self.seed);
        let now = Instant::now();
        let board = deal(&config, &mut rng)?;
        info!(
            "Dealt {} cards with {} sets in {:.3}ms",
            board.len(),
            board.count_sets(),
            now.elapsed().as_secs_f64() * 1000.0
        );

        Ok(board)
    }
}

/// The JSON output for a dealt board.
#[derive(Debug, Serialize)]
struct Dealt {
    cards: Vec<u8>,
    sets: Vec<Triple>,
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Deal { board, json } => {
            let board = board.deal()?;
            if json {
                let dealt = Dealt {
                    cards: board.ids(),
                    sets: board.sets(),
                };
                println!("{}", serde_json::to_string(&dealt)?);
            } else {
                println!("Board: {board}");
                println!("Sets:");
                for set in board.sets() {
                    println!("  {set}");
                }
            }
        }
        Command::Play { board } => {
            let game = game::Game::new(board.deal()?);
            terminal::run(game, io::stdin().lock(), io::stdout())?;
        }
        Command::Check { cards } => check(&cards, io::stdout())?,
        Command::Complete { cards } => complete_pair(&cards, io::stdout())?,
        Command::Stats {
            seed,
            samples,
            size,
        } => stats(seed, samples, size as usize)?,
    }

    Ok(())
}

/// Tells if three cards are a set, or which card the first two need.
fn check(cards: &[Card], mut out: impl Write) -> Result<()> {
    let &[a, b, c] = cards else {
        bail!("Expected three cards");
    };

    match count_sets(cards)? {
        1 => writeln!(out, "{a} {b} {c} is a set")?,
        _ => writeln!(out, "{a} {b} {c} is not a set, {a} {b} needs {}", complete(a, b))?,
    }

    Ok(())
}

/// Prints the card that completes a pair, a card completes with itself.
fn complete_pair(cards: &[Card], mut out: impl Write) -> Result<()> {
    let &[a, b] = cards else {
        bail!("Expected two cards");
    };

    writeln!(out, "{}", complete(a, b))?;
    Ok(())
}

/// Prints the sets count distribution over random hands.
fn stats(seed: Option<u64>, samples: usize, size: usize) -> Result<()> {
    let mut rng = new_rng(seed);
    let mut counts = BTreeMap::<usize, usize>::new();
    let mut failed = None;

    let now = Instant::now();
    Deck::default().sample(&mut rng, samples, size, |hand| match count_sets(hand) {
        Ok(sets) => *counts.entry(sets).or_default() += 1,
        Err(e) => failed = Some(e),
    });

    if let Some(e) = failed {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.values().sum::<usize>();
    println!("Total hands  {total}");
    println!("Elapsed:     {elapsed:.3}s");
    println!("Hands/sec:   {:.0}\n", total as f64 / elapsed);

    for (sets, count) in counts {
        let pct = 100.0 * count as f64 / total as f64;
        println!("{sets:>3} sets:   {count:>9} {pct:>7.3}%");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(args: &[&str]) -> String {
        let args = ["setgame"].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        match cli.command {
            Command::Check { cards } => check(&cards, &mut out).unwrap(),
            Command::Complete { cards } => complete_pair(&cards, &mut out).unwrap(),
            command => panic!("Unexpected command {command:?}"),
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn complete_command() {
        assert_eq!(output(&["complete", "1RFD", "2GOP"]), "3PSS\n");
        assert_eq!(output(&["complete", "2GOP", "1RFD"]), "3PSS\n");
        assert_eq!(output(&["complete", "1RFD", "1RFD"]), "1RFD\n");
        assert!(Cli::try_parse_from(["setgame", "complete", "1RFD"]).is_err());
        assert!(Cli::try_parse_from(["setgame", "complete", "1RFD", "4RFD"]).is_err());
    }

    #[test]
    fn check_command() {
        assert_eq!(
            output(&["check", "1RFD", "2GOP", "3PSS"]),
            "1RFD 2GOP 3PSS is a set\n"
        );
        assert_eq!(
            output(&["check", "1RFD", "1GFD", "1RFP"]),
            "1RFD 1GFD 1RFP is not a set, 1RFD 1GFD needs 1PFD\n"
        );

        let cards = [Card::ALL[0], Card::ALL[0], Card::ALL[1]];
        assert!(check(&cards, io::sink()).is_err());
    }
}
