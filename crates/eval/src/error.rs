// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::{Color, ParseError};

/// Evaluator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card or joker token is invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The pool has the wrong number of cards.
    #[error("invalid pool size {found}, expected {expected}")]
    InvalidPoolSize {
        /// The expected size, or range of sizes.
        expected: &'static str,
        /// The number of cards or tokens in the pool.
        found: usize,
    },
    /// There is no card left to substitute a joker.
    #[error("no valid substitution for joker ?{0}")]
    NoValidSubstitution(Color),
    /// The pool has more than one joker of a color.
    #[error("duplicate joker ?{0}")]
    DuplicateJoker(Color),
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
