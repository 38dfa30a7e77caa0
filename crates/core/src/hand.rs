// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player and dealer hands.
use serde::{Deserialize, Serialize};

use crate::{Card, Chips};

/// The best hand value.
pub const BLACKJACK: u32 = 21;

/// An ace counted as 11 adds this to its face value.
const SOFT_ACE_BONUS: u32 = 10;

/// Computes the Blackjack value of a sequence of cards.
///
/// Every ace counts 1 except for at most one ace that counts 11 when that
/// doesn't take the total above 21, so the result is the highest value not
/// above 21 if there is one, otherwise the lowest bust value.
///
/// ```
/// # use blackjack_core::{Card, hand_value};
/// assert_eq!(hand_value(&[Card::Queen, Card::Queen, Card::Ace]), 21);
/// assert_eq!(hand_value(&[Card::Four, Card::Ace, Card::Nine]), 14);
/// assert_eq!(hand_value(&[Card::Ace, Card::Six]), 17);
/// ```
pub fn hand_value(cards: &[Card]) -> u32 {
    let hard = cards.iter().map(Card::points).sum::<u32>();
    if is_soft_total(cards, hard) {
        hard + SOFT_ACE_BONUS
    } else {
        hard
    }
}

/// Checks if the cards value counts an ace as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    is_soft_total(cards, cards.iter().map(Card::points).sum())
}

/// Checks if the cards value is above 21.
pub fn exceeding_21(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

fn is_soft_total(cards: &[Card], hard: u32) -> bool {
    cards.iter().any(Card::is_ace) && hard + SOFT_ACE_BONUS <= BLACKJACK
}

/// A player hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// The chips wagered on this hand.
    pub betting_box: Chips,
    /// The hand cards in the order they were dealt.
    pub cards: Vec<Card>,
    /// The hand cannot take any more decisions.
    pub is_done: bool,
}

impl Hand {
    /// Creates an open hand.
    pub fn new(betting_box: Chips, cards: Vec<Card>) -> Self {
        Self {
            betting_box,
            cards,
            is_done: false,
        }
    }

    /// The hand value.
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Checks if the hand value is above 21.
    pub fn is_bust(&self) -> bool {
        exceeding_21(&self.cards)
    }

    /// Checks if the hand holds its two starting cards only.
    pub fn is_first_turn(&self) -> bool {
        self.cards.len() == 2
    }

    /// The hand busted, its wager goes to the house.
    pub(crate) fn lose(&mut self) {
        self.betting_box = Chips::ZERO;
        self.is_done = true;
    }
}

/// The dealer hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerHand {
    /// The dealer visible cards.
    pub cards: Vec<Card>,
    /// The face down card, revealed when every player hand is done.
    pub hidden_card: Option<Card>,
    /// The dealer has played.
    pub is_done: bool,
}

impl DealerHand {
    /// The dealer first visible card.
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The value of the visible cards.
    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    /// Checks if cards have been dealt to the dealer.
    pub fn is_dealt(&self) -> bool {
        !self.cards.is_empty() || self.hidden_card.is_some()
    }

    /// Moves the hidden card with the visible ones.
    pub(crate) fn reveal(&mut self) {
        if let Some(card) = self.hidden_card.take() {
            self.cards.push(card);
        }
    }
}
