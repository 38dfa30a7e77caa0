// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shoe shuffling.
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::Card;

/// Shuffles the cards of a new shoe.
///
/// The returned cards must be a permutation of the given cards, the table
/// deals them in the returned order. Any closure that takes and returns a
/// vector of cards is a shuffler, this makes it easy to use fixed shoes:
///
/// ```
/// # use blackjack_core::{BetRange, Card, Chips, Table, TableConfig};
/// let config = TableConfig::new(1, BetRange::new(Chips::new(5), Chips::new(100)).unwrap());
/// let mut reversed = |mut cards: Vec<Card>| {
///     cards.reverse();
///     cards
/// };
/// let table = Table::start(&mut reversed, config).unwrap();
/// assert_eq!(table.shoe().peek(), Some(Card::King));
/// ```
pub trait Shuffler {
    /// Returns the cards in dealing order.
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Shuffler for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// A shuffler backed by a seedable random generator.
#[derive(Debug, Clone)]
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// Creates a shuffler seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a shuffler that always produces the same sequence of shoes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.shuffle(&mut self.rng);
        cards
    }
}
