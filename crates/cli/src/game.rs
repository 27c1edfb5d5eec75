// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state for a dealt board.
use ahash::AHashSet;
use anyhow::{Result, bail};
use log::debug;

use setgame_engine::{Board, CardMask, Triple, count_sets};

/// The outcome of a set claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The three cards are not a set.
    NotASet,
    /// The set has been found before.
    AlreadyFound,
    /// A new set, with the number of sets found so far.
    Found(usize),
}

/// A board with the sets found by the player.
#[derive(Debug)]
pub struct Game {
    board: Board,
    total: usize,
    found: Vec<Triple>,
    found_masks: AHashSet<CardMask>,
}

impl Game {
    /// Creates a game for the given board.
    pub fn new(board: Board) -> Self {
        let total = board.count_sets();
        Self {
            board,
            total,
            found: Vec::new(),
            found_masks: AHashSet::default(),
        }
    }

    /// The game board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of sets on the board.
    pub fn total_sets(&self) -> usize {
        self.total
    }

    /// The sets found so far in finding order.
    pub fn found(&self) -> &[Triple] {
        &self.found
    }

    /// Checks if all the sets have been found.
    pub fn is_over(&self) -> bool {
        self.found.len() == self.total
    }

    /// Claims the cards at the given zero based board positions are a set.
    pub fn claim(&mut self, positions: [usize; 3]) -> Result<Claim> {
        let mut cards = Vec::with_capacity(3);
        for pos in positions {
            let Some(card) = self.board.get(pos) else {
                bail!("No card at position {}", pos + 1);
            };
            cards.push(card);
        }

        if count_sets(&cards)? != 1 {
            debug!("Cards {} {} {} are not a set", cards[0], cards[1], cards[2]);
            return Ok(Claim::NotASet);
        }

        let Some(set) = Triple::new(cards[0], cards[1], cards[2]) else {
            return Ok(Claim::NotASet);
        };

        if !self.found_masks.insert(set.mask()) {
            return Ok(Claim::AlreadyFound);
        }

        self.found.push(set);
        debug!("Found set {set} ({}/{})", self.found.len(), self.total);

        Ok(Claim::Found(self.found.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setgame_engine::Card;

    // Sets {0, 1, 2} and {0, 3, 6}.
    fn new_game() -> Game {
        let cards = [0, 1, 2, 3, 6]
            .into_iter()
            .map(|id: u8| Card::try_from(id).unwrap())
            .collect();
        Game::new(Board::new(cards).unwrap())
    }

    #[test]
    fn claim_sets() {
        let mut game = new_game();
        assert_eq!(game.total_sets(), 2);
        assert!(!game.is_over());

        assert_eq!(game.claim([0, 1, 3]).unwrap(), Claim::NotASet);
        assert_eq!(game.claim([0, 1, 2]).unwrap(), Claim::Found(1));
        assert_eq!(game.claim([2, 0, 1]).unwrap(), Claim::AlreadyFound);
        assert!(!game.is_over());

        assert_eq!(game.claim([4, 3, 0]).unwrap(), Claim::Found(2));
        assert!(game.is_over());
        assert_eq!(game.found().len(), 2);
        assert_eq!(game.found()[1].to_string(), "1RFD 1RFP 1RFS");
    }

    #[test]
    fn claim_invalid_positions() {
        let mut game = new_game();
        assert!(game.claim([0, 1, 5]).is_err());

        // The same card three times is a duplicate input.
        assert!(game.claim([1, 1, 1]).is_err());
        assert!(game.found().is_empty());
    }
}
