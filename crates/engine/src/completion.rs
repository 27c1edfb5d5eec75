// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Third card completion.
//!
//! Any two distinct cards are completed to a set by exactly one third card,
//! the completions of all ordered pairs are computed at compile time so that
//! [complete] is a table lookup.
use setgame_cards::{Card, Deck};

use crate::Result;

/// Creates the completion table for all the ordered pairs of cards.
const fn make_completions() -> [[Card; Deck::SIZE]; Deck::SIZE] {
    let mut t = [[Card::ALL[0]; Deck::SIZE]; Deck::SIZE];
    let mut a = 0;

    while a < Deck::SIZE {
        let mut b = 0;
        while b < Deck::SIZE {
            t[a][b] = Card::ALL[a].complete(Card::ALL[b]);
            b += 1;
        }

        a += 1;
    }

    t
}

static COMPLETIONS: [[Card; Deck::SIZE]; Deck::SIZE] = make_completions();

/// Returns the card that completes a set with `a` and `b`.
///
/// The result is symmetric in `a` and `b`, and `complete(a, a) == a`.
#[inline]
pub fn complete(a: Card, b: Card) -> Card {
    COMPLETIONS[a.index()][b.index()]
}

/// Same as [complete] for card ids, fails if an id is not a valid card.
pub fn complete_ids(a: u8, b: u8) -> Result<u8> {
    let (a, b) = (Card::try_from(a)?, Card::try_from(b)?);
    Ok(complete(a, b).id())
}

/// Checks if the three cards make a set.
///
/// The cards must be distinct, for each attribute the values are either all
/// the same or all different.
#[inline]
pub fn is_set(a: Card, b: Card, c: Card) -> bool {
    a != b && complete(a, b) == c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use setgame_cards::CardError;

    fn card(id: u8) -> Card {
        Card::try_from(id).unwrap()
    }

    // Set definition by attributes.
    fn attributes_set(a: Card, b: Card, c: Card) -> bool {
        if a == b || b == c || a == c {
            return false;
        }

        let (a, b, c) = (a.digits(), b.digits(), c.digits());
        (0..4).all(|i| {
            let all_same = a[i] == b[i] && b[i] == c[i];
            let all_diff = a[i] != b[i] && b[i] != c[i] && a[i] != c[i];
            all_same || all_diff
        })
    }

    #[test]
    fn table_matches_formula() {
        for a in Card::ALL {
            for b in Card::ALL {
                assert_eq!(complete(a, b), a.complete(b));
            }
        }
    }

    #[test]
    fn symmetry() {
        for a in Card::ALL {
            assert_eq!(complete(a, a), a);

            for b in Card::ALL {
                assert_eq!(complete(a, b), complete(b, a));
            }
        }
    }

    #[test]
    fn exactness() {
        for a in Card::ALL {
            for b in Card::ALL.into_iter().filter(|&b| b != a) {
                let thirds = Card::ALL
                    .into_iter()
                    .filter(|&c| attributes_set(a, b, c))
                    .collect::<Vec<_>>();

                assert_eq!(thirds, vec![complete(a, b)]);
                assert_ne!(thirds[0], a);
                assert_ne!(thirds[0], b);
            }
        }
    }

    #[test]
    fn set_validity() {
        for a in Card::ALL {
            for b in Card::ALL {
                for c in Card::ALL {
                    assert_eq!(is_set(a, b, c), attributes_set(a, b, c), "{a} {b} {c}");
                }
            }
        }
    }

    #[test]
    fn complete_cards() {
        // 1RFD + 1GFD = 1PFD
        assert_eq!(complete(card(0), card(1)), card(2));
        assert!(is_set(card(0), card(1), card(2)));
        assert!(!is_set(card(0), card(1), card(3)));
        assert!(!is_set(card(0), card(0), card(0)));

        let a = "1RFD".parse::<Card>().unwrap();
        let b = "2GOP".parse::<Card>().unwrap();
        assert_eq!(complete(a, b).to_string(), "3PSS");
    }

    #[test]
    fn complete_card_ids() {
        assert_eq!(complete_ids(0, 1), Ok(2));
        assert_eq!(complete_ids(80, 80), Ok(80));
        assert_eq!(
            complete_ids(0, 81),
            Err(Error::OutOfRangeCard(CardError::OutOfRange(81)))
        );
    }
}
