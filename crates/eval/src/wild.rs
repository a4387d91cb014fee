// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand for pools with jokers.
//!
//! A joker is replaced by every card of its color that is not already in the
//! pool, with two jokers all pairs of substitutions are evaluated. Candidates
//! are numbered with a mixed radix index, the black joker substitution is the
//! most significant digit, so that the candidates space can be split in
//! contiguous ranges that preserve the canonical order.
use log::debug;
use std::ops::Range;

use crate::{
    Card, Deck, Hand, POOL_SIZE, Token,
    error::{Error, Result},
};

/// Returns the best 5 cards hand out of a 7 tokens pool with up to one black
/// and one red joker.
///
/// Jokers are resolved to concrete cards in the returned hand, a pool without
/// jokers gives the same hand as [best_hand](crate::best_hand).
///
/// ```
/// # use besthand_eval::*;
/// let pool = parse_tokens("6C 7C 8C 9C TC 5C ?B").unwrap();
/// let hand = best_wild_hand(&pool).unwrap();
/// assert_eq!(hand.value(), HandValue::StraightFlush(Rank::Jack));
/// ```
pub fn best_wild_hand(pool: &[Token]) -> Result<Hand> {
    let wild = WildPool::new(pool)?;
    let (idx, hand) = wild.best_in(0..wild.num_candidates())?;
    wild.log_best(idx, &hand);
    Ok(hand)
}

/// Returns the tokens of the best 5 cards hand given 7 tokens with jokers.
pub fn best_wild_hand_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    let pool = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Token>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    best_wild_hand(&pool).map(|hand| hand.tokens())
}

/// A pool split in its concrete cards and the substitutions for each joker.
#[derive(Debug)]
pub(crate) struct WildPool {
    cards: Vec<Card>,
    /// The substitution cards for each joker, black joker first.
    substitutions: Vec<Vec<Card>>,
}

impl WildPool {
    /// Creates a wild pool from a 7 tokens pool.
    pub fn new(pool: &[Token]) -> Result<Self> {
        if pool.len() != POOL_SIZE {
            return Err(Error::InvalidPoolSize {
                expected: "7",
                found: pool.len(),
            });
        }

        Self::with_tokens(pool)
    }

    fn with_tokens(pool: &[Token]) -> Result<Self> {
        let mut cards = Vec::with_capacity(pool.len());
        let mut jokers = Vec::with_capacity(2);

        for token in pool {
            match *token {
                Token::Card(card) => cards.push(card),
                Token::Joker(color) if jokers.contains(&color) => {
                    return Err(Error::DuplicateJoker(color));
                }
                Token::Joker(color) => jokers.push(color),
            }
        }

        jokers.sort();

        let substitutions = jokers
            .into_iter()
            .map(|color| {
                let mut deck = Deck::with_color(color);
                for &card in &cards {
                    deck.remove(card);
                }

                if deck.is_empty() {
                    Err(Error::NoValidSubstitution(color))
                } else {
                    debug!("Joker ?{color} has {} substitutions", deck.count());
                    Ok(deck.into_iter().collect())
                }
            })
            .collect::<Result<Vec<Vec<Card>>>>()?;

        Ok(Self {
            cards,
            substitutions,
        })
    }

    /// The number of candidate pools, 1 if there are no jokers.
    pub fn num_candidates(&self) -> usize {
        self.substitutions.iter().map(Vec::len).product()
    }

    /// Returns the cards that replace the jokers in the candidate with the
    /// given index, black joker first.
    pub fn substitution(&self, mut idx: usize) -> Vec<Card> {
        let mut cards = self
            .substitutions
            .iter()
            .rev()
            .map(|subs| {
                let card = subs[idx % subs.len()];
                idx /= subs.len();
                card
            })
            .collect::<Vec<_>>();
        cards.reverse();
        cards
    }

    /// Returns the cards of the candidate pool with the given index.
    pub fn candidate(&self, idx: usize) -> Vec<Card> {
        let mut pool = self.cards.clone();
        pool.extend(self.substitution(idx));
        pool
    }

    /// Returns the index and best hand of the best candidate in the given non
    /// empty range, the first candidate wins ties.
    pub fn best_in(&self, range: Range<usize>) -> Result<(usize, Hand)> {
        debug_assert!(!range.is_empty(), "empty candidates range");

        let mut best_idx = range.start;
        let mut best = Hand::best_of(&self.candidate(range.start))?;
        for idx in range.start + 1..range.end {
            let hand = Hand::best_of(&self.candidate(idx))?;
            if hand.value() > best.value() {
                best_idx = idx;
                best = hand;
            }
        }

        Ok((best_idx, best))
    }

    /// Logs the jokers substitutions of the winning candidate.
    pub fn log_best(&self, idx: usize, hand: &Hand) {
        let jokers = self
            .substitution(idx)
            .iter()
            .map(|card| format!("?{}={card}", card.color()))
            .collect::<Vec<_>>();
        debug!(
            "Best wild hand {hand} {:?} jokers [{}]",
            hand.value(),
            jokers.join(" ")
        );
    }

    /// The number of jokers in this pool.
    #[cfg(test)]
    fn num_jokers(&self) -> usize {
        self.substitutions.len()
    }
}
