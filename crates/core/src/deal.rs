// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting cards distribution.
use log::info;

use crate::{DealerHand, PlayingHand, Result, Table, TableError};

impl Table {
    /// Deals two cards to every seat with a wager, then the dealer up card and
    /// hidden card, in shoe order.
    ///
    /// Seats without a wager sit out the round. The turn goes to the first
    /// hand of the first seat in the round.
    pub fn deal(&self) -> Result<Table> {
        if self.is_round_in_progress() {
            return Err(TableError::RoundInProgress);
        }

        let first = self
            .seats
            .iter()
            .find(|s| !s.wager().is_zero())
            .map(|s| s.id)
            .ok_or(TableError::NoBets)?;

        let mut table = self.clone();
        for idx in 0..table.seats.len() {
            if table.seats[idx].wager().is_zero() {
                table.seats[idx].hand_mut(0).is_done = true;
                continue;
            }

            let cards = vec![table.draw()?, table.draw()?];
            table.seats[idx].hand_mut(0).cards = cards;
        }

        let up_card = table.draw()?;
        let hidden_card = table.draw()?;
        table.dealer_hand = DealerHand {
            cards: vec![up_card],
            hidden_card: Some(hidden_card),
            is_done: false,
        };
        table.current_playing_hand = PlayingHand::new(first, 0);

        info!(
            "Dealt {} seats, dealer shows {up_card}, {} cards left",
            table.seats.iter().filter(|s| !s.wager().is_zero()).count(),
            table.shoe.len()
        );

        Ok(table)
    }
}
