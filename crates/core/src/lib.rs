// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack table rules engine.
//!
//! A [Table] is a value, every operation returns a new table leaving the
//! previous one unchanged, so callers can keep or discard snapshots freely:
//!
//! ```
//! # use blackjack_core::*;
//! let range = BetRange::new(Chips::new(5), Chips::new(100))?;
//! let mut shuffler = RandomShuffler::with_seed(7);
//! let table = Table::start(&mut shuffler, TableConfig::new(6, range))?
//!     .join(Player::new(Chips::new(500)), SeatId::new(0))?
//!     .bet(SeatId::new(0), Chips::new(50))?
//!     .deal()?;
//!
//! let mut table = table;
//! while !table.is_game_finished() {
//!     table = table.stand()?;
//! }
//!
//! let table = table.game_end()?;
//! assert!(!table.is_round_in_progress());
//! # Ok::<(), TableError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub use blackjack_cards::{Card, Deck, ParseCardError, Shoe};

mod chips;
pub use chips::Chips;

mod deal;

mod decision;
pub use decision::Decision;

mod error;
pub use error::{Result, TableError};

mod hand;
pub use hand::{BLACKJACK, DealerHand, Hand, exceeding_21, hand_value, is_soft};

mod seat;
pub use seat::{Player, Seat, SeatId};

mod settle;
pub use settle::{Outcome, outcome};

mod shuffler;
pub use shuffler::{RandomShuffler, Shuffler};

mod table;
pub use table::{BetRange, PlayingHand, Table, TableConfig};

mod turn;
pub use turn::DEALER_STAND_VALUE;
