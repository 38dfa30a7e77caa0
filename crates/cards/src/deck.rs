// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack cards definitions.
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, str::FromStr};

/// A Blackjack card.
///
/// Only the rank of a card matters in Blackjack, two cards with the same rank
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    /// Ace
    Ace,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Card {
    /// The number of distinct cards.
    pub const COUNT: usize = 13;

    /// Returns all cards in deck order.
    pub fn cards() -> impl DoubleEndedIterator<Item = Card> {
        use Card::*;
        [
            Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }

    /// Checks if this card is an ace.
    pub fn is_ace(&self) -> bool {
        matches!(self, Card::Ace)
    }

    /// The card face value, an ace counts 1 and pictures count 10.
    pub fn points(&self) -> u32 {
        match self {
            Card::Ace => 1,
            Card::Two => 2,
            Card::Three => 3,
            Card::Four => 4,
            Card::Five => 5,
            Card::Six => 6,
            Card::Seven => 7,
            Card::Eight => 8,
            Card::Nine => 9,
            Card::Ten | Card::Jack | Card::Queen | Card::King => 10,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = match self {
            Card::Ace => "ace",
            Card::Two => "2",
            Card::Three => "3",
            Card::Four => "4",
            Card::Five => "5",
            Card::Six => "6",
            Card::Seven => "7",
            Card::Eight => "8",
            Card::Nine => "9",
            Card::Ten => "10",
            Card::Jack => "j",
            Card::Queen => "q",
            Card::King => "k",
        };

        write!(f, "{card}")
    }
}

/// Error returned when parsing an invalid card symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardError(String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid card: {}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let card = match s.to_ascii_lowercase().as_str() {
            "ace" | "a" => Card::Ace,
            "2" => Card::Two,
            "3" => Card::Three,
            "4" => Card::Four,
            "5" => Card::Five,
            "6" => Card::Six,
            "7" => Card::Seven,
            "8" => Card::Eight,
            "9" => Card::Nine,
            "10" | "t" => Card::Ten,
            "j" => Card::Jack,
            "q" => Card::Queen,
            "k" => Card::King,
            _ => return Err(ParseCardError(s.to_string())),
        };

        Ok(card)
    }
}

/// A 52 cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = (0..4).flat_map(|_| Card::cards()).collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// The cards left to be dealt, the next card is at the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates an ordered shoe with the given number of decks.
    pub fn new(decks: usize) -> Self {
        let cards = (0..decks).flat_map(|_| Deck::default()).collect();
        Self { cards }
    }

    /// Removes the next card from the shoe.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Looks at the next card without removing it.
    pub fn peek(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Number of cards left in the shoe.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the shoe is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the cards left in dealing order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Shoe {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Shoe {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Shoe {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
