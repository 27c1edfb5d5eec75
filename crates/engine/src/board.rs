// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random boards generation.
//!
//! A board is dealt by drawing cards at random from a fresh deck, an attempt
//! is dropped as soon as the cards drawn so far have more sets than the target
//! and a full board is kept only if it has exactly the target number of sets,
//! otherwise a new attempt starts from a fresh deck.
//!
//! This always returns a valid board when it terminates but the number of
//! attempts is random, [BoardConfig::max_attempts] bounds the attempts before
//! giving up with [Error::GenerationExhausted].
use log::debug;
use rand::prelude::*;
use serde::Serialize;
use std::fmt;

use setgame_cards::{Card, CardMask, Deck};

use crate::{
    Error, Result,
    count::{self, Triple},
};

/// Board generation config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// The number of cards on the board.
    pub size: usize,
    /// The exact number of sets on the board.
    pub sets: usize,
    /// The attempts before giving up.
    pub max_attempts: usize,
}

impl BoardConfig {
    /// The standard board size.
    pub const STANDARD_SIZE: usize = 12;

    /// The standard number of sets on a board.
    pub const STANDARD_SETS: usize = 6;

    /// The default attempts limit.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

    /// Checks the target can be reached.
    fn validate(&self) -> Result<()> {
        if self.size > Deck::SIZE {
            return Err(Error::InvalidConfig(format!(
                "board size {} larger than the deck size {}",
                self.size,
                Deck::SIZE
            )));
        }

        let triples = match self.size {
            0..3 => 0,
            n => n * (n - 1) * (n - 2) / 6,
        };

        if self.sets > triples {
            return Err(Error::InvalidConfig(format!(
                "{} sets don't fit on {} cards",
                self.sets, self.size
            )));
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: Self::STANDARD_SIZE,
            sets: Self::STANDARD_SETS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A board of distinct cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cards: Vec<Card>,
    #[serde(skip)]
    mask: CardMask,
}

impl Board {
    /// Creates a board, fails if there are duplicate cards.
    pub fn new(cards: Vec<Card>) -> Result<Board> {
        let mask = count::unique_mask(&cards)?;
        Ok(Self { cards, mask })
    }

    /// The board cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card at the given position.
    pub fn get(&self, pos: usize) -> Option<Card> {
        self.cards.get(pos).copied()
    }

    /// The number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the board has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards ids.
    pub fn ids(&self) -> Vec<u8> {
        self.cards.iter().map(Card::id).collect()
    }

    /// The number of sets on the board.
    pub fn count_sets(&self) -> usize {
        count::count_in(&self.cards, &self.mask)
    }

    /// The sets on the board.
    pub fn sets(&self) -> Vec<Triple> {
        count::find_in(&self.cards, &self.mask)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Deals a standard board of 12 cards with exactly 6 sets.
pub fn random_twelve_game<R: Rng>(rng: &mut R) -> Result<Board> {
    deal(&BoardConfig::default(), rng)
}

/// Deals a board with the given size and number of sets.
pub fn deal<R: Rng>(config: &BoardConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;

    for attempt in 1..=config.max_attempts {
        if let Some(board) = try_deal(config, rng) {
            debug!(
                "Dealt {} cards with {} sets after {attempt} attempts",
                config.size, config.sets
            );
            return Ok(board);
        }
    }

    Err(Error::GenerationExhausted {
        size: config.size,
        sets: config.sets,
        attempts: config.max_attempts,
    })
}

/// Makes a single board attempt from a fresh deck.
fn try_deal<R: Rng>(config: &BoardConfig, rng: &mut R) -> Option<Board> {
    let mut deck = Deck::default();
    let mut cards = Vec::with_capacity(config.size);
    let mut mask = CardMask::EMPTY;

    while cards.len() < config.size {
        let card = deck.draw(rng)?;
        cards.push(card);
        mask.insert(card);

        if count::count_in(&cards, &mask) > config.sets {
            return None;
        }
    }

    if count::count_in(&cards, &mask) == config.sets {
        Some(Board { cards, mask })
    } else {
        None
    }
}
