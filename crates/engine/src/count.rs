// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sets counting.
//!
//! The counter checks each unordered pair of cards and looks up the card that
//! completes the pair in the input, each set is found three times, once for
//! each pair of its cards.
use serde::Serialize;
use std::fmt;

use setgame_cards::{Card, CardMask};

use crate::{Error, Result, completion::complete};

/// Three cards that make a set, sorted by card id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Triple([Card; 3]);

impl Triple {
    /// Creates a triple if the cards make a set.
    pub fn new(a: Card, b: Card, c: Card) -> Option<Triple> {
        if crate::is_set(a, b, c) {
            let mut cards = [a, b, c];
            cards.sort();
            Some(Triple(cards))
        } else {
            None
        }
    }

    /// The cards in this set.
    pub fn cards(&self) -> [Card; 3] {
        self.0
    }

    /// The cards mask for this set.
    pub fn mask(&self) -> CardMask {
        self.0.into_iter().collect()
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} {b} {c}")
    }
}

/// Builds the cards mask, fails if there are duplicate cards.
pub(crate) fn unique_mask(cards: &[Card]) -> Result<CardMask> {
    let mut mask = CardMask::EMPTY;
    for &card in cards {
        if !mask.insert(card) {
            return Err(Error::InvalidInput(card));
        }
    }

    Ok(mask)
}

/// Counts the pairs of cards whose completion is also in `cards`.
///
/// For valid input this is three times the number of sets.
pub fn count_witnesses(cards: &[Card]) -> Result<usize> {
    let mask = unique_mask(cards)?;
    Ok(witnesses_in(cards, &mask))
}

/// Counts the witness pairs of distinct `cards` with the given mask.
pub(crate) fn witnesses_in(cards: &[Card], mask: &CardMask) -> usize {
    let mut witnesses = 0;
    for (i, &a) in cards.iter().enumerate() {
        for &b in &cards[i + 1..] {
            if mask.contains(complete(a, b)) {
                witnesses += 1;
            }
        }
    }

    witnesses
}

/// Counts the sets of distinct `cards` with the given mask.
pub(crate) fn count_in(cards: &[Card], mask: &CardMask) -> usize {
    let witnesses = witnesses_in(cards, mask);
    debug_assert_eq!(witnesses % 3, 0, "{witnesses} witnesses for {cards:?}");
    witnesses / 3
}

/// Counts the sets in the given cards.
///
/// Fails with [Error::InvalidInput] if a card appears more than once.
pub fn count_sets(cards: &[Card]) -> Result<usize> {
    let mask = unique_mask(cards)?;
    Ok(count_in(cards, &mask))
}

/// Same as [count_sets] for card ids, fails if an id is not a valid card.
pub fn count_set_ids(ids: &[u8]) -> Result<usize> {
    let cards = ids
        .iter()
        .map(|&id| Card::try_from(id))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    count_sets(&cards)
}

/// Returns all the sets in the given cards.
///
/// Fails with [Error::InvalidInput] if a card appears more than once.
pub fn find_sets(cards: &[Card]) -> Result<Vec<Triple>> {
    let mask = unique_mask(cards)?;
    Ok(find_in(cards, &mask))
}

/// Returns the sets of distinct `cards` with the given mask.
pub(crate) fn find_in(cards: &[Card], mask: &CardMask) -> Vec<Triple> {
    let mut sets = Vec::new();
    for (i, &a) in cards.iter().enumerate() {
        for &b in &cards[i + 1..] {
            let c = complete(a, b);
            // Take each set once, from the pair with the two lowest cards.
            if c > a && c > b && mask.contains(c) {
                sets.extend(Triple::new(a, b, c));
            }
        }
    }

    sets
}
