// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table errors.
use thiserror::Error;

use crate::{Card, Chips, SeatId};

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// A violated table rule, the table the operation was applied to is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The bet range maximum is not above its minimum.
    #[error("Bet range with value min: {min} and max: {max} is invalid")]
    InvalidBetRange {
        /// The requested minimum.
        min: Chips,
        /// The requested maximum.
        max: Chips,
    },
    /// The number of decks in the shoe is out of range.
    #[error("Decks count should be between 1 and 8, {0} received")]
    InvalidDecksCount(u8),
    /// The seat id is beyond the table seats.
    #[error("Playing position {0} does not exist")]
    SeatOutOfRange(SeatId),
    /// The seat is taken by another player.
    #[error("This playing position is already taken")]
    PositionNotAvailable(SeatId),
    /// A seat holds one hand, or two after a split.
    #[error("A seat should hold 1 or 2 hands, {0} received")]
    InvalidHandsCount(usize),
    /// There is no player at this seat.
    #[error("No player at playing position {0}")]
    SeatNotFound(SeatId),
    /// The wager is below the table minimum.
    #[error("Player should bet more than {min}, {amount} received")]
    BetTooLow {
        /// The table minimum bet.
        min: Chips,
        /// The rejected amount.
        amount: Chips,
    },
    /// The wager is above the table maximum.
    #[error("Player should bet less than {max}, {amount} received")]
    BetTooHigh {
        /// The table maximum bet.
        max: Chips,
        /// The rejected amount.
        amount: Chips,
    },
    /// The player balance cannot cover the wager.
    #[error("Player has {available} available, {amount} required")]
    InsufficientFunds {
        /// The player balance.
        available: Chips,
        /// The required amount.
        amount: Chips,
    },
    /// The operation is only allowed between rounds.
    #[error("A round is already in progress")]
    RoundInProgress,
    /// Dealing requires at least one wager.
    #[error("At least one player should bet before dealing")]
    NoBets,
    /// The shoe ran out of cards.
    #[error("No more cards in the shoe")]
    ShoeExhausted,
    /// No hand is waiting for a decision.
    #[error("There is no hand waiting for a decision")]
    NoHandToPlay,
    /// Double requested on a split seat.
    #[error("You can only double when you have not split")]
    OnlyDoubleWhenNoSplit,
    /// Split requested on two different cards.
    #[error("Card {0} and card {1} should be equal for a split")]
    OnlySplitEqualCards(Card, Card),
    /// Split requested after the first turn.
    #[error("You can only split cards on your first turn")]
    OnlySplitFirstTurn,
    /// Surrender requested after the first turn.
    #[error("You can only surrender on your first turn")]
    OnlySurrenderFirstTurn,
    /// Settlement requested before the dealer played.
    #[error("Game is not finished yet")]
    GameNotFinished,
    /// The player still has chips or cards in the current round.
    #[error("Cannot leave a started game")]
    CannotLeaveStartedGame,
}
