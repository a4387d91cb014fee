// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand out of a 7 cards pool.
use crate::{
    Card, Hand,
    error::{Error, Result},
};

/// The number of tokens in a pool.
pub const POOL_SIZE: usize = 7;

/// Returns the best 5 cards hand out of a 7 cards pool.
///
/// ```
/// # use besthand_eval::*;
/// let pool = "TD TC TH 7C 7D 8C 8S"
///     .split_whitespace()
///     .map(|c| c.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// let hand = best_hand(&pool).unwrap();
/// assert_eq!(hand.rank(), HandRank::FullHouse);
/// ```
pub fn best_hand(pool: &[Card]) -> Result<Hand> {
    if pool.len() != POOL_SIZE {
        return Err(Error::InvalidPoolSize {
            expected: "7",
            found: pool.len(),
        });
    }

    Hand::best_of(pool)
}

/// Returns the tokens of the best 5 cards hand given 7 cards tokens.
pub fn best_hand_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    let pool = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Card>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    best_hand(&pool).map(|hand| hand.tokens())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandRank, HandValue, KSubsets, ParseError, Rank};
    use ahash::HashSet;
    use rand::prelude::*;

    fn best(s: &str) -> HashSet<String> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        best_hand_tokens(&tokens).unwrap().into_iter().collect()
    }

    fn set(s: &str) -> HashSet<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn straight_flush() {
        assert_eq!(best("6C 7C 8C 9C TC 5C JS"), set("6C 7C 8C 9C TC"));
    }

    #[test]
    fn full_house() {
        assert_eq!(best("TD TC TH 7C 7D 8C 8S"), set("8C 8S TC TD TH"));
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(best("JD TC TH 7C 7D 7S 7H"), set("7C 7D 7H 7S JD"));
    }

    #[test]
    fn invalid_pools() {
        assert_eq!(
            best_hand_tokens(&["6C", "7C", "8C", "9C", "TC", "5C"]),
            Err(Error::InvalidPoolSize {
                expected: "7",
                found: 6
            })
        );
        assert_eq!(
            best_hand_tokens(&["6C", "7C", "8C", "9C", "TC", "5C", "?B"]),
            Err(Error::Parse(ParseError::InvalidCard("?B".to_string())))
        );
        assert_eq!(
            best_hand_tokens(&["6C", "7C", "8C", "9C", "TC", "5C", "1S"]),
            Err(Error::Parse(ParseError::InvalidCard("1S".to_string())))
        );
    }

    #[test]
    fn random_pools() {
        let mut rng = rand::rng();

        for _ in 0..200 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut pool = (0..POOL_SIZE)
                .filter_map(|_| deck.deal())
                .collect::<Vec<_>>();

            let hand = best_hand(&pool).unwrap();
            assert!(hand.cards().iter().all(|c| pool.contains(c)));
            let unique = hand.cards().iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5);

            // No other subset is better.
            for subset in KSubsets::<5>::new(POOL_SIZE) {
                let other = HandValue::eval(&subset.map(|i| pool[i]));
                assert!(other <= hand.value());
            }

            // The best value doesn't depend on the pool order.
            pool.shuffle(&mut rng);
            assert_eq!(best_hand(&pool).unwrap().value(), hand.value());
        }
    }

    #[test]
    fn permuted_pool() {
        let mut rng = rand::rng();
        let mut pool = ["TD", "TC", "TH", "7C", "7D", "8C", "8S"]
            .map(|c| c.parse::<Card>().unwrap());
        let expected = best_hand(&pool).unwrap();

        for _ in 0..20 {
            pool.shuffle(&mut rng);
            let hand = best_hand(&pool).unwrap();
            let cards = hand.cards().iter().collect::<HashSet<_>>();
            assert_eq!(cards, expected.cards().iter().collect::<HashSet<_>>());
            assert_eq!(hand.rank(), HandRank::FullHouse);
            assert_eq!(hand.value(), HandValue::FullHouse(Rank::Ten, Rank::Eight));
        }
    }
}
