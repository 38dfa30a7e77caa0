// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The Blackjack table state.
//!
//! A [Table] is an immutable snapshot, every operation borrows the current
//! table and returns a new table or an error leaving the original untouched.
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Card, Chips, DealerHand, Hand, Player, Result, Seat, SeatId, Shoe, Shuffler, TableError,
};

/// The table minimum and maximum bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBetRange")]
pub struct BetRange {
    min: Chips,
    max: Chips,
}

/// Deserialized bet range before validation.
#[derive(Deserialize)]
struct RawBetRange {
    min: Chips,
    max: Chips,
}

impl TryFrom<RawBetRange> for BetRange {
    type Error = TableError;

    fn try_from(raw: RawBetRange) -> Result<Self> {
        BetRange::new(raw.min, raw.max)
    }
}

impl BetRange {
    /// Creates a bet range, the maximum must be above the minimum.
    pub fn new(min: Chips, max: Chips) -> Result<Self> {
        if max > min {
            Ok(Self { min, max })
        } else {
            Err(TableError::InvalidBetRange { min, max })
        }
    }

    /// The minimum bet.
    pub fn min(&self) -> Chips {
        self.min
    }

    /// The maximum bet.
    pub fn max(&self) -> Chips {
        self.max
    }

    /// Checks that an amount is within this range.
    pub fn check(&self, amount: Chips) -> Result<()> {
        if amount < self.min {
            Err(TableError::BetTooLow {
                min: self.min,
                amount,
            })
        } else if amount > self.max {
            Err(TableError::BetTooHigh {
                max: self.max,
                amount,
            })
        } else {
            Ok(())
        }
    }
}

/// Table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The number of decks in the shoe.
    pub decks: u8,
    /// The table bet range.
    pub bet_range: BetRange,
}

impl TableConfig {
    /// Creates a configuration.
    pub fn new(decks: u8, bet_range: BetRange) -> Self {
        Self { decks, bet_range }
    }
}

/// The hand waiting for a decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingHand {
    /// The seat that holds the hand.
    pub seat: SeatId,
    /// The hand index, 1 is the second hand of a split.
    pub hand: usize,
}

impl PlayingHand {
    /// Creates a playing hand.
    pub fn new(seat: SeatId, hand: usize) -> Self {
        Self { seat, hand }
    }
}

/// A Blackjack table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) shoe: Shoe,
    pub(crate) seats: Vec<Seat>,
    pub(crate) dealer_hand: DealerHand,
    pub(crate) bet_range: BetRange,
    pub(crate) current_playing_hand: PlayingHand,
    pub(crate) decks: u8,
}

impl Table {
    /// The number of seats at a table, ids go from 0 to `SEATS - 1`.
    pub const SEATS: u8 = 9;

    /// The maximum number of decks in a shoe.
    pub const MAX_DECKS: u8 = 8;

    /// Creates an empty table with a freshly shuffled shoe.
    pub fn start<S>(shuffler: &mut S, config: TableConfig) -> Result<Table>
    where
        S: Shuffler + ?Sized,
    {
        let shoe = new_shoe(shuffler, config.decks)?;

        info!(
            "Table started with {} decks, bets from {} to {}",
            config.decks,
            config.bet_range.min(),
            config.bet_range.max()
        );

        Ok(Table {
            shoe,
            seats: Vec::default(),
            dealer_hand: DealerHand::default(),
            bet_range: config.bet_range,
            current_playing_hand: PlayingHand::default(),
            decks: config.decks,
        })
    }

    /// The cards left in the shoe.
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Number of cards left in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// The seats in the order players joined.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns a seat given its id.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// The dealer hand.
    pub fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// The table bet range.
    pub fn bet_range(&self) -> BetRange {
        self.bet_range
    }

    /// The turn pointer.
    pub fn current_playing_hand(&self) -> PlayingHand {
        self.current_playing_hand
    }

    /// The hand waiting for a decision, if any.
    pub fn current_hand(&self) -> Option<(&Seat, &Hand)> {
        if !self.dealer_hand.is_dealt() || self.dealer_hand.is_done {
            return None;
        }

        let PlayingHand { seat, hand } = self.current_playing_hand;
        self.seat(seat)
            .and_then(|s| s.hand(hand).map(|h| (s, h)))
            .filter(|(_, h)| !h.is_done)
    }

    /// Checks if a round has been dealt and not settled yet.
    pub fn is_round_in_progress(&self) -> bool {
        self.dealer_hand.is_dealt()
            || self
                .seats
                .iter()
                .any(|s| s.hands().iter().any(|h| !h.cards.is_empty()))
    }

    /// Checks if every seat hand is done and the dealer has to play.
    pub fn is_dealer_turn(&self) -> bool {
        self.seats.iter().all(Seat::is_done)
    }

    /// Checks if the dealer and every seat played, the round can be settled.
    pub fn is_game_finished(&self) -> bool {
        self.dealer_hand.is_done && self.is_dealer_turn()
    }

    /// A player takes a seat.
    pub fn join(&self, player: Player, id: SeatId) -> Result<Table> {
        if id.number() >= Self::SEATS {
            return Err(TableError::SeatOutOfRange(id));
        }

        if self.seat(id).is_some() {
            return Err(TableError::PositionNotAvailable(id));
        }

        if self.is_round_in_progress() {
            return Err(TableError::RoundInProgress);
        }

        let mut table = self.clone();
        table.seats.push(Seat::new(id, player));

        info!(
            "Player joined seat {id} with {} chips",
            player.available_money
        );

        Ok(table)
    }

    /// A player places the wager for the next round.
    ///
    /// A second bet before the deal replaces the first one.
    pub fn bet(&self, id: SeatId, amount: Chips) -> Result<Table> {
        self.bet_range.check(amount)?;

        let idx = self.seat_index(id).ok_or(TableError::SeatNotFound(id))?;
        if self.is_round_in_progress() {
            return Err(TableError::RoundInProgress);
        }

        let mut table = self.clone();
        let seat = &mut table.seats[idx];

        // Take back a previous bet.
        let previous = seat.hand(0).map(|h| h.betting_box).unwrap_or_default();
        let available = seat.available_money + previous;
        seat.available_money = available
            .checked_sub(amount)
            .ok_or(TableError::InsufficientFunds { available, amount })?;
        seat.hand_mut(0).betting_box = amount;

        Ok(table)
    }

    /// A player leaves the table, allowed only without chips or cards in play.
    pub fn leave(&self, id: SeatId) -> Result<Table> {
        let seat = self.seat(id).ok_or(TableError::SeatNotFound(id))?;
        if seat.is_playing() {
            return Err(TableError::CannotLeaveStartedGame);
        }

        info!("Player left seat {id} with {} chips", seat.available_money);

        let mut table = self.clone();
        table.seats.retain(|s| s.id != id);
        Ok(table)
    }

    /// Replaces the shoe with a freshly shuffled one.
    ///
    /// Cards already dealt stay in play, so a round that ran out of cards
    /// can go on with the new shoe.
    pub fn replace_shoe<S>(&self, shuffler: &mut S) -> Result<Table>
    where
        S: Shuffler + ?Sized,
    {
        let mut table = self.clone();
        table.shoe = new_shoe(shuffler, self.decks)?;

        info!(
            "New shoe with {} cards, {} cards discarded",
            table.shoe.len(),
            self.shoe.len()
        );

        Ok(table)
    }

    pub(crate) fn seat_index(&self, id: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| s.id == id)
    }

    pub(crate) fn draw(&mut self) -> Result<Card> {
        self.shoe.draw().ok_or(TableError::ShoeExhausted)
    }
}

fn new_shoe<S>(shuffler: &mut S, decks: u8) -> Result<Shoe>
where
    S: Shuffler + ?Sized,
{
    if !(1..=Table::MAX_DECKS).contains(&decks) {
        return Err(TableError::InvalidDecksCount(decks));
    }

    let cards = Shoe::new(decks as usize).into_iter().collect();
    Ok(Shoe::from(shuffler.shuffle(cards)))
}
