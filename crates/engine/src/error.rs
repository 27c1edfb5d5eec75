// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine errors.
use setgame_cards::{Card, CardError};

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The same card appears more than once in the input.
    #[error("invalid input, duplicate card {0}")]
    InvalidInput(Card),
    /// A card id or attribute is not valid.
    #[error(transparent)]
    OutOfRangeCard(#[from] CardError),
    /// The board generator gave up after too many attempts.
    #[error("no board of {size} cards with {sets} sets after {attempts} attempts")]
    GenerationExhausted {
        /// The board size.
        size: usize,
        /// The target number of sets.
        sets: usize,
        /// The attempts made.
        attempts: usize,
    },
    /// The board generator configuration can never be satisfied.
    #[error("invalid board config: {0}")]
    InvalidConfig(String),
}
