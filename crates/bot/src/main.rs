// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Blackjack table driver.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use blackjack_bot::{
    Config, DealerStrategy,
    core::{Chips, Outcome, Table},
};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of automated players.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=Table::SEATS as i64))]
    seats: u8,
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 100)]
    rounds: u32,
    /// Number of decks in the shoe.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=Table::MAX_DECKS as i64))]
    decks: u8,
    /// The table minimum bet.
    #[clap(long, default_value_t = 10)]
    min_bet: u32,
    /// The table maximum bet.
    #[clap(long, default_value_t = 500)]
    max_bet: u32,
    /// Chips each player joins with.
    #[clap(long, default_value_t = 1_000)]
    chips: u32,
    /// Seed for reproducible shoes.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        seats: cli.seats,
        rounds: cli.rounds,
        decks: cli.decks,
        min_bet: Chips::new(cli.min_bet),
        max_bet: Chips::new(cli.max_bet),
        chips: Chips::new(cli.chips),
        seed: cli.seed,
    };

    let summary = blackjack_bot::run(config, || DealerStrategy)?;

    info!(
        "Played {} rounds: {} wins, {} pushes, {} losses",
        summary.rounds,
        summary.count(Outcome::Win),
        summary.count(Outcome::Push),
        summary.count(Outcome::Loss)
    );

    for (id, chips) in &summary.chips {
        info!("Seat {id} ends with {chips} chips");
    }

    Ok(())
}
