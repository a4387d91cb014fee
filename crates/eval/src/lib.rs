// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Besthand poker hand evaluator.
//!
//! Finds the best 5 cards poker hand out of a pool of 7 cards that can include
//! up to two jokers, a black joker `?B` that stands for any club or spade and
//! a red joker `?R` that stands for any heart or diamond.
//!
//! Use [best_hand] for a pool of 7 cards:
//!
//! ```
//! # use besthand_eval::*;
//! let tokens = ["6C", "7C", "8C", "9C", "TC", "5C", "JS"];
//! let mut hand = best_hand_tokens(&tokens).unwrap();
//! hand.sort();
//! assert_eq!(hand, ["6C", "7C", "8C", "9C", "TC"]);
//! ```
//!
//! and [best_wild_hand] for a pool with jokers:
//!
//! ```
//! # use besthand_eval::*;
//! let pool = parse_tokens("TD TC 5H 5C 7C ?R ?B").unwrap();
//! let hand = best_wild_hand(&pool).unwrap();
//! assert_eq!(hand.value(), HandValue::FourOfAKind(Rank::Ten, Rank::Seven));
//! ```
//!
//! Hands are compared using their [HandValue], a value that orders hands by
//! category first and by ranks within a category. Note that an ace is always
//! the highest rank, `A 2 3 4 5` is not a straight.
//!
//! The **`parallel`** feature enables `par_best_wild_hand` that splits the
//! jokers substitutions between multiple threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub mod error;
pub mod eval;

mod best;
mod wild;

#[cfg(feature = "parallel")]
mod parallel;

pub use best::{POOL_SIZE, best_hand, best_hand_tokens};
pub use error::Error;
pub use eval::{Hand, HandRank, HandValue};
pub use wild::{best_wild_hand, best_wild_hand_tokens};

#[cfg(feature = "parallel")]
pub use parallel::par_best_wild_hand;

// Reexport cards types.
pub use besthand_cards::{
    Card, Color, Deck, KSubsets, ParseError, Rank, Suit, Token, parse_tokens,
};
