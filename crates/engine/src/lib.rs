// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Set card game rule engine.
//!
//! Three cards make a set if, for each of the four attributes, the cards
//! values are either all the same or all different. Any two cards are
//! completed to a set by exactly one card:
//!
//! ```
//! # use setgame_engine::*;
//! let a = "1RFD".parse::<Card>().unwrap();
//! let b = "2GOP".parse::<Card>().unwrap();
//! let c = complete(a, b);
//! assert_eq!(c.to_string(), "3PSS");
//! assert!(is_set(a, b, c));
//! assert_eq!(count_sets(&[a, b, c]), Ok(1));
//! ```
//!
//! The engine can deal boards with an exact number of sets, the random
//! source is passed by the caller:
//!
//! ```
//! # use setgame_engine::*;
//! let board = random_twelve_game(&mut rand::rng()).unwrap();
//! assert_eq!(board.len(), 12);
//! assert_eq!(board.count_sets(), 6);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod board;
pub use board::{Board, BoardConfig, deal, random_twelve_game};

pub mod completion;
pub use completion::{complete, complete_ids, is_set};

pub mod count;
pub use count::{Triple, count_set_ids, count_sets, count_witnesses, find_sets};

mod error;
pub use error::{Error, Result};

// Reexport cards types.
pub use setgame_cards::{Card, CardError, CardMask, Colour, Deck, Number, Shading, Shape};
