// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Set cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Errors returned when decoding, encoding or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The card id is not in the deck range.
    #[error("card id {0} out of range 0..{max}", max = Deck::SIZE)]
    OutOfRange(u8),
    /// An attribute value is not 0, 1 or 2.
    #[error("invalid attribute value {0}")]
    InvalidAttribute(u8),
    /// The card text doesn't have 4 symbols.
    #[error("invalid card length {0}, expected 4 symbols")]
    InvalidLength(usize),
    /// The card text has an unknown symbol.
    #[error("invalid card symbol '{0}'")]
    InvalidSymbol(char),
}

/// A Set card.
///
/// Each card has four attributes with three possible values, the card id is
/// the base 3 number with the attribute values as digits, the colour being
/// the least significant digit:
///
/// ```text
///   id = colour + 3 * shape + 9 * shading + 27 * number
/// ```
///
/// so that ids go from 0 (one red solid diamond) to 80 (three purple striped
/// squiggles).
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// All the cards in id order.
    pub const ALL: [Card; Deck::SIZE] = {
        let mut cards = [Card(0); Deck::SIZE];
        let mut id = 0;
        while id < Deck::SIZE {
            cards[id] = Card(id as u8);
            id += 1;
        }
        cards
    };

    /// Creates a card given its attributes.
    pub fn new(colour: Colour, shape: Shape, shading: Shading, number: Number) -> Card {
        let digits = [colour as u8, shape as u8, shading as u8, number as u8];
        Self(digits[0] + 3 * digits[1] + 9 * digits[2] + 27 * digits[3])
    }

    /// Encodes the attribute digits, colour first, into a card.
    pub fn from_digits(digits: [u8; 4]) -> Result<Card, CardError> {
        if let Some(&d) = digits.iter().find(|&&d| d > 2) {
            return Err(CardError::InvalidAttribute(d));
        }

        Ok(Self(digits[0] + 3 * digits[1] + 9 * digits[2] + 27 * digits[3]))
    }

    /// Decodes this card into its attribute digits, colour first.
    pub const fn digits(&self) -> [u8; 4] {
        let mut digits = [0; 4];
        let mut id = self.0;
        let mut i = 0;
        while i < 4 {
            digits[i] = id % 3;
            id /= 3;
            i += 1;
        }
        digits
    }

    /// This card unique id in `0..81`.
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// This card id as an index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the third card that makes a set with this and the other card.
    ///
    /// For each attribute the third value is the same value if the two cards
    /// agree, or the missing value if they differ, that is `(6 - a - b) % 3`.
    /// Completing a card with itself returns the same card.
    pub const fn complete(self, other: Card) -> Card {
        let (mut a, mut b) = (self.0, other.0);
        let mut id = 0;
        let mut weight = 1;
        while a > 0 || b > 0 {
            let (ad, bd) = (a % 3, b % 3);
            id += ((6 - ad - bd) % 3) * weight;
            weight *= 3;
            a /= 3;
            b /= 3;
        }
        Card(id)
    }

    /// Returns the card colour.
    pub fn colour(&self) -> Colour {
        Colour::from_digit(self.digits()[0])
    }

    /// Returns the card shape.
    pub fn shape(&self) -> Shape {
        Shape::from_digit(self.digits()[1])
    }

    /// Returns the card shading.
    pub fn shading(&self) -> Shading {
        Shading::from_digit(self.digits()[2])
    }

    /// Returns the number of symbols on the card.
    pub fn number(&self) -> Number {
        Number::from_digit(self.digits()[3])
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < Deck::SIZE {
            Ok(Card(id))
        } else {
            Err(CardError::OutOfRange(id))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.number(),
            self.colour(),
            self.shading(),
            self.shape()
        )
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the `<number><colour><shading><shape>` form, case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s.trim().chars().collect::<Vec<_>>();
        let &[n, c, sh, sp] = symbols.as_slice() else {
            return Err(CardError::InvalidLength(symbols.len()));
        };

        let number = Number::from_symbol(n).ok_or(CardError::InvalidSymbol(n))?;
        let colour = Colour::from_symbol(c).ok_or(CardError::InvalidSymbol(c))?;
        let shading = Shading::from_symbol(sh).ok_or(CardError::InvalidSymbol(sh))?;
        let shape = Shape::from_symbol(sp).ok_or(CardError::InvalidSymbol(sp))?;

        Ok(Card::new(colour, shape, shading, number))
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    /// Red
    Red = 0,
    /// Green
    Green,
    /// Purple
    Purple,
}

impl Colour {
    /// Returns all colours.
    pub fn colours() -> impl DoubleEndedIterator<Item = Colour> {
        [Colour::Red, Colour::Green, Colour::Purple].into_iter()
    }

    fn from_digit(d: u8) -> Self {
        match d {
            0 => Colour::Red,
            1 => Colour::Green,
            _ => Colour::Purple,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Colour::Red),
            'G' => Some(Colour::Green),
            'P' => Some(Colour::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colour = match self {
            Colour::Red => 'R',
            Colour::Green => 'G',
            Colour::Purple => 'P',
        };

        write!(f, "{colour}")
    }
}

/// Card symbol shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// Diamond
    Diamond = 0,
    /// Pill
    Pill,
    /// Squiggle
    Squiggle,
}

impl Shape {
    /// Returns all shapes.
    pub fn shapes() -> impl DoubleEndedIterator<Item = Shape> {
        [Shape::Diamond, Shape::Pill, Shape::Squiggle].into_iter()
    }

    fn from_digit(d: u8) -> Self {
        match d {
            0 => Shape::Diamond,
            1 => Shape::Pill,
            _ => Shape::Squiggle,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(Shape::Diamond),
            'P' => Some(Shape::Pill),
            'S' => Some(Shape::Squiggle),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Shape::Diamond => 'D',
            Shape::Pill => 'P',
            Shape::Squiggle => 'S',
        };

        write!(f, "{shape}")
    }
}

/// Card symbol shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shading {
    /// Filled symbol.
    Solid = 0,
    /// Outlined symbol.
    Open,
    /// Striped symbol.
    Striped,
}

impl Shading {
    /// Returns all shadings.
    pub fn shadings() -> impl DoubleEndedIterator<Item = Shading> {
        [Shading::Solid, Shading::Open, Shading::Striped].into_iter()
    }

    fn from_digit(d: u8) -> Self {
        match d {
            0 => Shading::Solid,
            1 => Shading::Open,
            _ => Shading::Striped,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(Shading::Solid),
            'O' => Some(Shading::Open),
            'S' => Some(Shading::Striped),
            _ => None,
        }
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shading = match self {
            Shading::Solid => 'F',
            Shading::Open => 'O',
            Shading::Striped => 'S',
        };

        write!(f, "{shading}")
    }
}

/// Number of symbols on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Number {
    /// One symbol.
    One = 0,
    /// Two symbols.
    Two,
    /// Three symbols.
    Three,
}

impl Number {
    /// Returns all numbers.
    pub fn numbers() -> impl DoubleEndedIterator<Item = Number> {
        [Number::One, Number::Two, Number::Three].into_iter()
    }

    /// The symbols count.
    pub fn count(&self) -> usize {
        *self as usize + 1
    }

    fn from_digit(d: u8) -> Self {
        match d {
            0 => Number::One,
            1 => Number::Two,
            _ => Number::Three,
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '1' => Some(Number::One),
            '2' => Some(Number::Two),
            '3' => Some(Number::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 81;

    /// Removes a card chosen uniformly at random from the remaining cards.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let idx = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Cards in a hand are distinct, hands are sampled independently.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: Card::ALL.to_vec(),
        }
    }
}
