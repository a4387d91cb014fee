// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::time::Instant;

use besthand_eval::{Color, Deck, Hand, HandRank, HandValue, POOL_SIZE, Token, best_hand};

/// The CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Finds the best hand in a pool of 7 tokens, `?B` and `?R` are jokers.
    Best {
        /// The pool tokens, for example `TD TC 5H 5C 7C ?R ?B`.
        #[clap(required = true)]
        tokens: Vec<String>,
    },
    /// Counts the categories of all 5 cards hands.
    Stats,
    /// Deals a random pool and finds its best hand.
    Deal {
        /// Seed for a repeatable deal.
        #[clap(long)]
        seed: Option<u64>,
        /// Number of jokers in the pool.
        #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
        jokers: u8,
    },
}

/// The CLI configuration.
#[derive(Debug)]
pub struct Config {
    /// The command to run.
    pub command: Command,
    /// Print results as JSON.
    pub json: bool,
    /// Number of threads used to search pools with jokers.
    pub tasks: usize,
}

/// A pool and its best hand.
#[derive(Debug, Serialize)]
struct Report<'a> {
    pool: &'a [Token],
    hand: Hand,
    rank: HandRank,
}

/// Runs a command.
pub fn run(config: Config) -> Result<()> {
    match &config.command {
        Command::Best { tokens } => {
            let pool = parse_pool(tokens)?;
            let hand = evaluate(&pool, config.tasks)?;
            print_report(&pool, hand, config.json)
        }
        Command::Stats => print_stats(config.json),
        Command::Deal { seed, jokers } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };

            let pool = deal_pool(&mut rng, *jokers as usize)?;
            let hand = evaluate(&pool, config.tasks)?;
            print_report(&pool, hand, config.json)
        }
    }
}

/// Parses pool tokens, each argument may contain more than one token.
fn parse_pool(args: &[String]) -> Result<Vec<Token>> {
    let pool = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|t| t.parse::<Token>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut cards = AHashSet::with_capacity(pool.len());
    for card in pool.iter().filter_map(Token::card) {
        if !cards.insert(card) {
            bail!("Duplicate card {card}");
        }
    }

    Ok(pool)
}

/// Finds the best hand, pools without jokers skip the substitutions search.
fn evaluate(pool: &[Token], tasks: usize) -> Result<Hand> {
    let hand = if pool.iter().all(|t| t.joker().is_none()) {
        let cards = pool.iter().filter_map(Token::card).collect::<Vec<_>>();
        best_hand(&cards)?
    } else {
        best_wild_hand(pool, tasks)?
    };

    debug!("Pool {} best hand {hand}", tokens_string(pool));
    Ok(hand)
}

#[cfg(feature = "parallel")]
fn best_wild_hand(pool: &[Token], tasks: usize) -> besthand_eval::error::Result<Hand> {
    besthand_eval::par_best_wild_hand(pool, tasks)
}

#[cfg(not(feature = "parallel"))]
fn best_wild_hand(pool: &[Token], tasks: usize) -> besthand_eval::error::Result<Hand> {
    if tasks > 1 {
        log::warn!("Built without the parallel feature, using 1 task");
    }

    besthand_eval::best_wild_hand(pool)
}

/// Deals a pool with the given number of jokers.
fn deal_pool(rng: &mut StdRng, jokers: usize) -> Result<Vec<Token>> {
    let mut deck = Deck::new_and_shuffled(rng);
    let mut pool = Vec::with_capacity(POOL_SIZE);

    for _ in jokers..POOL_SIZE {
        let card = deck.deal().ok_or_else(|| anyhow!("Deck is empty"))?;
        pool.push(Token::Card(card));
    }

    pool.extend(
        [Token::Joker(Color::Black), Token::Joker(Color::Red)]
            .into_iter()
            .take(jokers),
    );

    Ok(pool)
}

fn print_report(pool: &[Token], hand: Hand, json: bool) -> Result<()> {
    if json {
        let report = Report {
            pool,
            hand,
            rank: hand.rank(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Pool: {}", tokens_string(pool));
        println!("Hand: {hand} ({})", hand.rank());
    }

    Ok(())
}

/// Counts the number of hands for each category.
fn category_counts() -> [usize; 9] {
    let mut counts = [0usize; 9];
    Deck::default().for_each::<5, _>(|hand| {
        counts[HandValue::eval(hand).rank() as usize] += 1;
    });
    counts
}

fn print_stats(json: bool) -> Result<()> {
    let now = Instant::now();
    let counts = category_counts();
    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();

    info!("Evaluated {total} hands in {elapsed:.3}s");

    if json {
        let counts = HandRank::ranks().zip(counts).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("Total hands      {total}");
        println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);
        for rank in HandRank::ranks() {
            println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
        }
    }

    Ok(())
}

fn tokens_string(pool: &[Token]) -> String {
    pool.iter().map(Token::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_pool_args() {
        let pool = parse_pool(&args(&["TD TC 5H", "5C", "7C ?R ?B"])).unwrap();
        assert_eq!(pool.len(), POOL_SIZE);
        assert_eq!(tokens_string(&pool), "TD TC 5H 5C 7C ?R ?B");

        let err = parse_pool(&args(&["TD TC 5H 5C TD ?R ?B"])).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate card TD");

        let err = parse_pool(&args(&["TD TC 5H 5C 7C ?R ?X"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid joker '?X'");
    }

    #[test]
    fn evaluate_pools() {
        let pool = parse_pool(&args(&["TD TC 5H 5C 7C ?R ?B"])).unwrap();
        let hand = evaluate(&pool, 4).unwrap();
        assert_eq!(hand.rank(), HandRank::FourOfAKind);

        let pool = parse_pool(&args(&["TD TC TH 7C 7D 8C 8S"])).unwrap();
        let hand = evaluate(&pool, 1).unwrap();
        assert_eq!(hand.rank(), HandRank::FullHouse);

        let pool = parse_pool(&args(&["TD TC TH 7C 7D 8C"])).unwrap();
        let err = evaluate(&pool, 1).unwrap_err();
        assert_eq!(err.to_string(), "invalid pool size 6, expected 7");
    }

    #[test]
    fn deal_pools() {
        for jokers in 0..=2 {
            let mut rng = StdRng::seed_from_u64(7);
            let pool = deal_pool(&mut rng, jokers).unwrap();
            assert_eq!(pool.len(), POOL_SIZE);
            assert_eq!(pool.iter().filter(|t| t.joker().is_some()).count(), jokers);
            assert!(evaluate(&pool, 2).is_ok());

            // Same seed, same pool.
            let mut rng = StdRng::seed_from_u64(7);
            assert_eq!(deal_pool(&mut rng, jokers).unwrap(), pool);
        }
    }
}
