// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranks classification functions for 5 cards hands.
//!
//! These are the building blocks used by [HandValue::eval](crate::HandValue::eval),
//! all functions are pure and work on ranks sorted from highest to lowest.
use crate::{Card, Rank};

/// Returns the hand ranks sorted from highest to lowest, with duplicates.
pub fn card_ranks(hand: &[Card; 5]) -> [Rank; 5] {
    let mut ranks = hand.map(|c| c.rank());
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Checks if all the cards have the same suit.
pub fn is_flush(hand: &[Card; 5]) -> bool {
    let suit = hand[0].suit();
    hand.iter().all(|c| c.suit() == suit)
}

/// Checks if the sorted ranks form a run of consecutive ranks.
///
/// The ace only counts as the highest rank, `A 5 4 3 2` is not a straight.
pub fn is_straight(ranks: &[Rank]) -> bool {
    ranks
        .windows(2)
        .all(|w| w[0].value() == w[1].value() + 1)
}

/// Returns the first rank that appears exactly `n` times in `ranks`.
pub fn kind(n: usize, ranks: &[Rank]) -> Option<Rank> {
    ranks
        .iter()
        .copied()
        .find(|&r| ranks.iter().filter(|&&other| other == r).count() == n)
}

/// Returns the ranks of two different pairs, highest first for sorted ranks.
pub fn two_pair(ranks: &[Rank]) -> Option<(Rank, Rank)> {
    let first = kind(2, ranks)?;
    let rest = ranks
        .iter()
        .copied()
        .filter(|&r| r != first)
        .collect::<Vec<_>>();
    let second = kind(2, &rest)?;
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use besthand_cards::parse_tokens;
    use Rank::*;

    fn hand(s: &str) -> [Card; 5] {
        let cards = parse_tokens(s)
            .unwrap()
            .iter()
            .filter_map(|t| t.card())
            .collect::<Vec<_>>();
        cards.try_into().unwrap()
    }

    #[test]
    fn ranks_sorted_with_duplicates() {
        assert_eq!(
            card_ranks(&hand("7C TD 7H AS 2C")),
            [Ace, Ten, Seven, Seven, Deuce]
        );
    }

    #[test]
    fn flush() {
        assert!(is_flush(&hand("2H 9H JH 4H KH")));
        assert!(!is_flush(&hand("2H 9H JH 4H KD")));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&[Ten, Nine, Eight, Seven, Six]));
        assert!(is_straight(&[Ace, King, Queen, Jack, Ten]));
        assert!(!is_straight(&[Ten, Nine, Eight, Seven, Five]));
        assert!(!is_straight(&[Ten, Nine, Nine, Eight, Seven]));

        // No wheel.
        assert!(!is_straight(&[Ace, Five, Four, Trey, Deuce]));
    }

    #[test]
    fn kinds() {
        let ranks = [Jack, Seven, Seven, Seven, Seven];
        assert_eq!(kind(4, &ranks), Some(Seven));
        assert_eq!(kind(1, &ranks), Some(Jack));
        assert_eq!(kind(3, &ranks), None);
        assert_eq!(kind(2, &ranks), None);

        let ranks = [Ten, Ten, Ten, Eight, Eight];
        assert_eq!(kind(3, &ranks), Some(Ten));
        assert_eq!(kind(2, &ranks), Some(Eight));

        // First in order wins.
        let ranks = [King, Queen, Nine, Nine, Four];
        assert_eq!(kind(1, &ranks), Some(King));
    }

    #[test]
    fn two_pairs() {
        assert_eq!(two_pair(&[King, King, Five, Five, Deuce]), Some((King, Five)));
        assert_eq!(two_pair(&[Ace, Jack, Jack, Trey, Trey]), Some((Jack, Trey)));
        assert_eq!(two_pair(&[Ace, Jack, Jack, Trey, Deuce]), None);
        assert_eq!(two_pair(&[Jack, Jack, Jack, Trey, Trey]), None);
        assert_eq!(two_pair(&[Ace, King, Queen, Trey, Deuce]), None);
    }
}
