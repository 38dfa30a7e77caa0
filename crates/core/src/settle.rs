// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! End of round settlement.
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Card, Chips, DealerHand, Hand, PlayingHand, Result, Table, TableError, exceeding_21,
    hand_value,
};

/// The result of a hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The hand beats the dealer.
    Win,
    /// Same value as the dealer.
    Push,
    /// The hand busted or the dealer has a better value.
    Loss,
}

impl Outcome {
    /// The chips returned to the player for a wager.
    pub fn payout(&self, betting_box: Chips) -> Chips {
        match self {
            Outcome::Win => betting_box * 2,
            Outcome::Push => betting_box,
            Outcome::Loss => Chips::ZERO,
        }
    }
}

/// Compares a hand with the dealer cards.
///
/// Equal values push, including two busted hands, then a hand not above 21
/// wins over a lower or busted dealer.
pub fn outcome(hand: &Hand, dealer_cards: &[Card]) -> Outcome {
    let value = hand.value();
    let dealer = hand_value(dealer_cards);

    if value == dealer {
        Outcome::Push
    } else if !hand.is_bust() && (value > dealer || exceeding_21(dealer_cards)) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

impl Table {
    /// Pays every hand and resets the table for the next round.
    ///
    /// Seats left without chips are removed. The shoe carries over.
    pub fn game_end(&self) -> Result<Table> {
        if !self.is_game_finished() {
            return Err(TableError::GameNotFinished);
        }

        let dealer = &self.dealer_hand.cards;
        let mut table = self.clone();
        for seat in &mut table.seats {
            let won = seat
                .hands()
                .iter()
                .map(|h| outcome(h, dealer).payout(h.betting_box))
                .sum::<Chips>();

            seat.available_money += won;
            seat.reset_hands();

            info!(
                "Seat {} collects {won}, balance {}",
                seat.id, seat.available_money
            );
        }

        table.seats.retain(|s| {
            if s.available_money.is_zero() {
                info!("Seat {} has no chips left", s.id);
                false
            } else {
                true
            }
        });

        table.dealer_hand = DealerHand::default();
        table.current_playing_hand = PlayingHand::default();
        Ok(table)
    }
}
