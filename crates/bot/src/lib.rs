// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack table driver with automated players.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashMap;
use anyhow::{Result, bail};
use log::{info, warn};

use blackjack_core::{
    BetRange, Chips, Deck, Outcome, Player, RandomShuffler, SeatId, Shuffler, Table, TableConfig,
    TableError, outcome,
};

pub use blackjack_core as core;

mod strategy;
pub use strategy::{DealerStrategy, Strategy};

/// Table driver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of automated players.
    pub seats: u8,
    /// Number of rounds to play.
    pub rounds: u32,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// The table minimum bet.
    pub min_bet: Chips,
    /// The table maximum bet.
    pub max_bet: Chips,
    /// Chips each player joins with.
    pub chips: Chips,
    /// Seed for the shuffler, shoes are random if not set.
    pub seed: Option<u64>,
}

/// The result of a run.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Rounds played.
    pub rounds: u32,
    /// Final chips of the players still seated.
    pub chips: Vec<(SeatId, Chips)>,
    /// Number of hands for each outcome.
    pub outcomes: AHashMap<Outcome, usize>,
}

impl Summary {
    /// Number of hands with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.get(&outcome).copied().unwrap_or_default()
    }
}

/// Plays rounds given a config and a strategy factory called for each seat.
pub fn run<F, S>(config: Config, factory: F) -> Result<Summary>
where
    F: Fn() -> S,
    S: Strategy,
{
    let mut shuffler = match config.seed {
        Some(seed) => RandomShuffler::with_seed(seed),
        None => RandomShuffler::new(),
    };

    play(config, factory, &mut shuffler)
}

/// Plays rounds drawing shoes from the given shuffler.
pub fn play<F, S, R>(config: Config, factory: F, shuffler: &mut R) -> Result<Summary>
where
    F: Fn() -> S,
    S: Strategy,
    R: Shuffler + ?Sized,
{
    if config.seats == 0 || config.seats > Table::SEATS {
        bail!("Seats should be between 1 and {}", Table::SEATS);
    }

    let range = BetRange::new(config.min_bet, config.max_bet)?;
    let mut table = Table::start(shuffler, TableConfig::new(config.decks, range))?;

    let mut strategies = Vec::with_capacity(config.seats as usize);
    for id in 0..config.seats {
        table = table.join(Player::new(config.chips), SeatId::new(id))?;
        strategies.push(factory());
    }

    // New shoe between rounds, capped at half the shoe for small shoes.
    let reshuffle_at =
        (config.seats as usize * 6 + 10).min(config.decks as usize * Deck::SIZE / 2);
    let mut summary = Summary::default();

    while summary.rounds < config.rounds {
        // Players that cannot cover the minimum bet leave.
        let broke = table
            .seats()
            .iter()
            .filter(|s| s.available_money < range.min())
            .map(|s| s.id)
            .collect::<Vec<_>>();
        for id in broke {
            table = table.leave(id)?;
        }

        if table.seats().is_empty() {
            info!("No players left after {} rounds", summary.rounds);
            break;
        }

        if table.cards_remaining() < reshuffle_at {
            table = table.replace_shoe(shuffler)?;
        }

        let seats = table.seats().to_vec();
        for seat in &seats {
            let amount = strategies[seat.id.number() as usize].bet(seat, &range);
            table = match table.bet(seat.id, amount) {
                Ok(table) => table,
                Err(err) => {
                    warn!("Seat {} bet rejected: {err}", seat.id);
                    table.bet(seat.id, range.min())?
                }
            };
        }

        table = with_cards(&mut table, shuffler, Table::deal)?;

        while let Some((seat, hand)) = table.current_hand() {
            let id = seat.id;
            let up_card = table.dealer_hand().up_card();
            let decision = strategies[id.number() as usize].decide(hand, seat, up_card);

            table = match with_cards(&mut table, shuffler, |t| t.decide(decision)) {
                Ok(table) => table,
                Err(err) => {
                    warn!("Seat {id} {decision} rejected: {err}");
                    with_cards(&mut table, shuffler, Table::stand)?
                }
            };
        }

        if !table.is_game_finished() {
            bail!("Round {} ended without the dealer playing", summary.rounds);
        }

        let dealer = &table.dealer_hand().cards;
        for hand in table.seats().iter().flat_map(|s| s.hands()) {
            *summary.outcomes.entry(outcome(hand, dealer)).or_default() += 1;
        }

        table = table.game_end()?;
        summary.rounds += 1;

        info!(
            "Round {} chips: {}",
            summary.rounds,
            table
                .seats()
                .iter()
                .map(|s| format!("{}={}", s.id, s.available_money))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    summary.chips = table
        .seats()
        .iter()
        .map(|s| (s.id, s.available_money))
        .collect();

    Ok(summary)
}

/// Applies an operation, loading a new shoe and trying again if the shoe runs
/// out of cards.
fn with_cards<R, F>(table: &mut Table, shuffler: &mut R, op: F) -> blackjack_core::Result<Table>
where
    R: Shuffler + ?Sized,
    F: Fn(&Table) -> blackjack_core::Result<Table>,
{
    match op(table) {
        Err(TableError::ShoeExhausted) => {
            info!(
                "Shoe exhausted with {} cards, loading a new one",
                table.cards_remaining()
            );
            *table = table.replace_shoe(shuffler)?;
            op(table)
        }
        res => res,
    }
}
