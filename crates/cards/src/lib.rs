// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Set card game cards types.
//!
//! This crate define types to create cards, a card has a colour, a shape,
//! a shading and a number of symbols:
//!
//! ```
//! # use setgame_cards::{Card, Colour, Number, Shading, Shape};
//! let card = Card::new(Colour::Green, Shape::Pill, Shading::Open, Number::Two);
//! assert_eq!(card.to_string(), "2GOP");
//! assert_eq!(card.digits(), [1, 1, 1, 1]);
//! assert_eq!(card.id(), 40);
//! ```
//!
//! cards can be converted from and to their id in `0..81`:
//!
//! ```
//! # use setgame_cards::{Card, CardError};
//! let card = Card::try_from(2u8).unwrap();
//! assert_eq!(card.digits(), [2, 0, 0, 0]);
//! assert_eq!(Card::from_digits([2, 0, 0, 0]), Ok(card));
//! assert_eq!(Card::try_from(81u8), Err(CardError::OutOfRange(81)));
//! ```
//!
//! and a [Deck] type for drawing and sampling random cards, for example to
//! sample 10 random 12-cards hands:
//!
//! ```
//! # use setgame_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 12, |hand| {
//!     assert_eq!(hand.len(), 12);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardError, Colour, Deck, Number, Shading, Shape};

mod mask;
pub use mask::CardMask;
