// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards membership bitmask.
use std::fmt;

use crate::Card;

/// A set of cards with one bit per card id.
///
/// Membership tests are a single mask operation and two masks with the same
/// cards compare equal regardless of insertion order, so a mask can be used as
/// a key for an unordered group of cards.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardMask(u128);

impl CardMask {
    /// The empty mask.
    pub const EMPTY: CardMask = CardMask(0);

    /// Adds a card, returns false if the card was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = Self::bit(card);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Checks if the mask contains the card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    /// Number of cards in the mask.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the mask is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the cards in this mask in id order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }

            let id = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Card::ALL[id])
        })
    }

    #[inline]
    fn bit(card: Card) -> u128 {
        1 << card.index()
    }
}

impl FromIterator<Card> for CardMask {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut mask = CardMask::EMPTY;
        for card in iter {
            mask.insert(card);
        }
        mask
    }
}

impl fmt::Debug for CardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    #[test]
    fn insert() {
        let mut mask = CardMask::EMPTY;
        assert!(mask.is_empty());

        for card in Card::ALL {
            assert!(!mask.contains(card));
            assert!(mask.insert(card));
            assert!(!mask.insert(card));
            assert!(mask.contains(card));
        }
        assert_eq!(mask.len(), Deck::SIZE);
        assert_eq!(mask.iter().collect::<Vec<_>>(), Card::ALL);

        let odd = Card::ALL.into_iter().skip(1).step_by(2).collect::<CardMask>();
        assert_eq!(odd.len(), 40);
        assert!(odd.iter().all(|c| c.id() % 2 == 1));
    }

    #[test]
    fn order_independent() {
        let cards = [Card::ALL[80], Card::ALL[3], Card::ALL[41]];
        let m1 = cards.into_iter().collect::<CardMask>();
        let m2 = cards.into_iter().rev().collect::<CardMask>();
        assert_eq!(m1, m2);
        assert_eq!(
            m1.iter().collect::<Vec<_>>(),
            vec![Card::ALL[3], Card::ALL[41], Card::ALL[80]]
        );
        assert_eq!(format!("{m1:?}"), "{Card(1RFP), Card(2POP), Card(3PSS)}");
    }
}
