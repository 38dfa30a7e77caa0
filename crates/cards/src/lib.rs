// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack cards types.
//!
//! Suits play no role in Blackjack so a [Card] is just one of the 13 ranks:
//!
//! ```
//! # use blackjack_cards::Card;
//! let ace: Card = "ace".parse().unwrap();
//! assert!(ace.is_ace());
//! assert_eq!(Card::King.to_string(), "k");
//! ```
//!
//! A [Deck] is the ordered 52 cards deck, a [Shoe] holds one or more decks
//! and hands out cards from its front:
//!
//! ```
//! # use blackjack_cards::{Card, Deck, Shoe};
//! let mut shoe = Shoe::new(2);
//! assert_eq!(shoe.len(), 2 * Deck::SIZE);
//! assert_eq!(shoe.draw(), Some(Card::Ace));
//! assert_eq!(shoe.len(), 2 * Deck::SIZE - 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Shoe};
