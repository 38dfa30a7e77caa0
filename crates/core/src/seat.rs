// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table seats.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Chips, Hand, TableError};

/// A seat identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(u8);

impl SeatId {
    /// Creates a seat id.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The seat number.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl From<u8> for SeatId {
    fn from(id: u8) -> Self {
        SeatId(id)
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player joining the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The chips the player brings to the table.
    pub available_money: Chips,
}

impl Player {
    /// Creates a player with the given chips.
    pub fn new(available_money: Chips) -> Self {
        Self { available_money }
    }
}

/// A seat taken by a player.
///
/// A seat plays one hand, or two hands after a split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeat")]
pub struct Seat {
    /// The seat id.
    pub id: SeatId,
    /// The player chips not on the table.
    pub available_money: Chips,
    hands: Vec<Hand>,
}

#[derive(Deserialize)]
struct RawSeat {
    id: SeatId,
    available_money: Chips,
    hands: Vec<Hand>,
}

impl TryFrom<RawSeat> for Seat {
    type Error = TableError;

    fn try_from(raw: RawSeat) -> Result<Self, TableError> {
        if !matches!(raw.hands.len(), 1 | 2) {
            return Err(TableError::InvalidHandsCount(raw.hands.len()));
        }

        Ok(Self {
            id: raw.id,
            available_money: raw.available_money,
            hands: raw.hands,
        })
    }
}

impl Seat {
    /// Creates a seat with a single empty hand.
    pub fn new(id: SeatId, player: Player) -> Self {
        Self {
            id,
            available_money: player.available_money,
            hands: vec![Hand::default()],
        }
    }

    /// This seat hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at the given index.
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Checks if this seat played a split.
    pub fn is_split(&self) -> bool {
        self.hands.len() > 1
    }

    /// Checks if all hands are done.
    pub fn is_done(&self) -> bool {
        self.hands.iter().all(|h| h.is_done)
    }

    /// Index of the first hand still waiting for decisions.
    pub fn open_hand(&self) -> Option<usize> {
        self.hands.iter().position(|h| !h.is_done)
    }

    /// The chips wagered on all hands.
    pub fn wager(&self) -> Chips {
        self.hands.iter().map(|h| h.betting_box).sum()
    }

    /// Checks if this seat has cards or chips in the current round.
    pub fn is_playing(&self) -> bool {
        self.hands
            .iter()
            .any(|h| !h.betting_box.is_zero() || !h.cards.is_empty())
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> &mut Hand {
        &mut self.hands[index]
    }

    /// Replaces the single hand with two hands.
    pub(crate) fn split_into(&mut self, first: Hand, second: Hand) {
        debug_assert_eq!(self.hands.len(), 1);
        self.hands = vec![first, second];
    }

    /// Back to a single empty hand for the next round.
    pub(crate) fn reset_hands(&mut self) {
        self.hands = vec![Hand::default()];
    }

    #[cfg(test)]
    pub(crate) fn with_hands(id: u8, available_money: u32, hands: Vec<Hand>) -> Self {
        assert!(matches!(hands.len(), 1 | 2));
        Self {
            id: SeatId(id),
            available_money: Chips::new(available_money),
            hands,
        }
    }
}
