// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Automated player strategies.
use blackjack_core::{BetRange, Card, Chips, DEALER_STAND_VALUE, Decision, Hand, Seat};

/// A Blackjack player strategy.
pub trait Strategy {
    /// The wager for the next round, the table minimum is used if the table
    /// rejects it.
    fn bet(&mut self, seat: &Seat, range: &BetRange) -> Chips;

    /// A decision for a hand given the dealer visible card.
    ///
    /// A decision the table rejects is replaced with a stand.
    fn decide(&mut self, hand: &Hand, seat: &Seat, dealer_up: Option<Card>) -> Decision;
}

/// Bets the table minimum and plays like the dealer, hits below 17.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerStrategy;

impl Strategy for DealerStrategy {
    fn bet(&mut self, _seat: &Seat, range: &BetRange) -> Chips {
        range.min()
    }

    fn decide(&mut self, hand: &Hand, _seat: &Seat, _dealer_up: Option<Card>) -> Decision {
        if hand.value() < DEALER_STAND_VALUE {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}
