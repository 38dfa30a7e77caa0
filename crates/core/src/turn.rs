// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Turn sequencing and dealer play.
use log::{debug, info};

use crate::{PlayingHand, Result, Table, TableError, hand_value};

/// The dealer draws until reaching this value.
pub const DEALER_STAND_VALUE: u32 = 17;

impl Table {
    /// Moves the turn pointer after a decision on the current hand.
    ///
    /// A split seat plays its second hand right after the first one when
    /// `second_hand` is set, otherwise the turn goes round the table to the
    /// next seat with an open hand. When no open hand is left the dealer
    /// plays and the pointer stays on the last hand that acted.
    pub(crate) fn advance_turn(&mut self, second_hand: bool) -> Result<()> {
        let PlayingHand { seat, hand } = self.current_playing_hand;
        let idx = self.seat_index(seat).ok_or(TableError::NoHandToPlay)?;

        if second_hand && hand == 0 {
            let acting = &self.seats[idx];
            if acting.hand(1).is_some_and(|h| !h.is_done) {
                self.current_playing_hand = PlayingHand::new(seat, 1);
                debug!("Turn to seat {seat} second hand");
                return Ok(());
            }
        }

        let count = self.seats.len();
        let next = (1..=count)
            .map(|step| &self.seats[(idx + step) % count])
            .find_map(|s| s.open_hand().map(|hand| PlayingHand::new(s.id, hand)));

        match next {
            Some(next) => {
                debug!("Turn to seat {} hand {}", next.seat, next.hand);
                self.current_playing_hand = next;
                Ok(())
            }
            None => self.play_dealer(),
        }
    }

    /// Reveals the hidden card and draws until the dealer reaches 17.
    fn play_dealer(&mut self) -> Result<()> {
        self.dealer_hand.reveal();

        while hand_value(&self.dealer_hand.cards) < DEALER_STAND_VALUE {
            let card = self.draw()?;
            self.dealer_hand.cards.push(card);
        }

        self.dealer_hand.is_done = true;

        info!(
            "Dealer stands with {} ({})",
            hand_value(&self.dealer_hand.cards),
            self.dealer_hand
                .cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );

        Ok(())
    }
}
