// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Besthand cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use besthand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "KD".parse::<Card>().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! jokers [tokens](Token) that can stand for any card of their [Color]:
//!
//! ```
//! # use besthand_cards::{Color, Token};
//! let joker = "?R".parse::<Token>().unwrap();
//! assert_eq!(joker, Token::Joker(Color::Red));
//! ```
//!
//! a [Deck] type for shuffling, dealing, and iterating hands in the deck,
//! for example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use besthand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each::<5, _>(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! and the [KSubsets] iterator used to enumerate combinations of indices.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod subsets;
mod token;

pub use card::{Card, Color, Rank, Suit};
pub use deck::Deck;
pub use subsets::{KSubsets, nck};
pub use token::{ParseError, Token, parse_tokens};
