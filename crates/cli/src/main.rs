// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Besthand CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

pub mod commands;

use commands::{Command, Config};

#[derive(Debug, Parser)]
#[clap(version, about = "Finds the best 5 cards poker hand in a pool of 7 cards")]
struct Cli {
    /// Log debug messages.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    /// Number of threads used to search pools with jokers.
    #[clap(long, global = true, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    #[clap(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config {
        command: cli.command,
        json: cli.json,
        tasks: cli.tasks as usize,
    };

    if let Err(e) = commands::run(config) {
        error!("{e}");
        std::process::exit(1);
    }
}
