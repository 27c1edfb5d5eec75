// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

use crate::game::{Claim, Game};

/// Cards per row when printing the board.
const ROW_CARDS: usize = 4;

/// Runs the game loop reading claims from `input` until all sets are found
/// or the player quits.
pub fn run<R, W>(mut game: Game, input: R, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    print_board(&game, &mut out)?;
    writeln!(
        out,
        "Find {} sets, enter three card positions or 'q' to quit.",
        game.total_sets()
    )?;

    let mut lines = input.lines();
    while !game.is_over() {
        let Some(line) = lines.next() else {
            break;
        };

        let line = line?;
        let line = line.trim();

        if line.eq_ignore_ascii_case("q") {
            break;
        } else if line.is_empty() {
            continue;
        }

        let claim = parse_positions(line).and_then(|positions| game.claim(positions));
        match claim {
            Ok(Claim::NotASet) => writeln!(out, "Not a set")?,
            Ok(Claim::AlreadyFound) => writeln!(out, "Already found!")?,
            Ok(Claim::Found(1)) => writeln!(out, "Found 1 set")?,
            Ok(Claim::Found(n)) => writeln!(out, "Found {n} sets")?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    if game.is_over() {
        writeln!(out, "All sets found!")?;
    }

    for set in game.found() {
        writeln!(out, "  {set}")?;
    }

    Ok(())
}

/// Prints the board cards with their one based positions.
fn print_board<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    for (idx, card) in game.board().cards().iter().enumerate() {
        write!(out, "{:>3}: {card}", idx + 1)?;

        if (idx + 1) % ROW_CARDS == 0 || idx + 1 == game.board().len() {
            writeln!(out)?;
        } else {
            write!(out, "  ")?;
        }
    }

    Ok(())
}

/// Parses three one based positions separated by spaces or commas.
fn parse_positions(line: &str) -> Result<[usize; 3]> {
    let positions = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>();

    match positions.as_deref() {
        Ok(&[a, b, c]) if a > 0 && b > 0 && c > 0 => Ok([a - 1, b - 1, c - 1]),
        _ => bail!("Enter three card positions, e.g. 1 5 9"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setgame_engine::{Board, Card};

    fn new_game(ids: &[u8]) -> Game {
        let cards = ids
            .iter()
            .copied()
            .map(|id: u8| Card::try_from(id).unwrap())
            .collect();
        Game::new(Board::new(cards).unwrap())
    }

    fn play(input: &str) -> String {
        let mut out = Vec::new();
        run(new_game(&[0, 1, 2, 3, 6]), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn positions() {
        assert_eq!(parse_positions("1 2 3").unwrap(), [0, 1, 2]);
        assert_eq!(parse_positions(" 12,1 ,  7 ").unwrap(), [11, 0, 6]);
        assert!(parse_positions("1 2").is_err());
        assert!(parse_positions("1 2 3 4").is_err());
        assert!(parse_positions("0 1 2").is_err());
        assert!(parse_positions("a b c").is_err());
    }

    #[test]
    fn play_all_sets() {
        let out = play("1 2 4\n1 2 3\n3 2 1\n\n1 4 5\n");
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "  1: 1RFD    2: 1GFD    3: 1PFD    4: 1RFP");
        assert_eq!(lines[1], "  5: 1RFS");
        assert_eq!(
            lines[2..7],
            [
                "Find 2 sets, enter three card positions or 'q' to quit.",
                "Not a set",
                "Found 1 set",
                "Already found!",
                "Found 2 sets",
            ]
        );
        assert_eq!(lines[7], "All sets found!");
        assert_eq!(lines[8], "  1RFD 1GFD 1PFD");
        assert_eq!(lines[9], "  1RFD 1RFP 1RFS");
    }

    #[test]
    fn play_quit() {
        let out = play("1 2 3\nq\n1 4 5\n");
        assert!(out.contains("Found 1 set\n"));
        assert!(!out.contains("All sets found!"));
        assert!(!out.contains("Found 2 sets"));
    }

    #[test]
    fn play_bad_input() {
        let out = play("1 2 9\nfoo\nq\n");
        assert!(out.contains("No card at position 9"));
        assert!(out.contains("Enter three card positions"));
    }

    #[test]
    fn play_no_sets() {
        let mut out = Vec::new();
        run(new_game(&[0, 1, 3]), "1 2 3\n".as_bytes(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[1..],
            [
                "Find 0 sets, enter three card positions or 'q' to quit.",
                "All sets found!",
            ]
        );
    }
}
