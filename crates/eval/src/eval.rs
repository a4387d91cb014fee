// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! It provides a [HandValue::eval] method that computes the value of a 5 cards
//! hand, and a [Hand::best_of] method that finds the best 5 cards hand out of
//! 5, 6, or 7 cards.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    Card, KSubsets, Rank,
    classify::{card_ranks, is_flush, is_straight, kind, two_pair},
    error::{Error, Result},
};

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a 5 cards hand.
///
/// Variants are declared from the weakest to the strongest category so that
/// the derived ordering compares the category first and then the tiebreak
/// ranks in order, rank arrays are sorted from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandValue {
    /// All ranks.
    HighCard([Rank; 5]),
    /// The pair rank and all ranks.
    OnePair(Rank, [Rank; 5]),
    /// The high and low pair ranks and all ranks.
    TwoPair(Rank, Rank, [Rank; 5]),
    /// The trips rank and all ranks.
    ThreeOfAKind(Rank, [Rank; 5]),
    /// The highest rank.
    Straight(Rank),
    /// All ranks.
    Flush([Rank; 5]),
    /// The trips and pair ranks.
    FullHouse(Rank, Rank),
    /// The quads and kicker ranks.
    FourOfAKind(Rank, Rank),
    /// The highest rank.
    StraightFlush(Rank),
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// ```
    /// # use besthand_eval::*;
    /// let hand = ["TD", "TC", "TH", "8C", "8S"].map(|c| c.parse::<Card>().unwrap());
    /// let v = HandValue::eval(&hand);
    /// assert_eq!(v, HandValue::FullHouse(Rank::Ten, Rank::Eight));
    /// assert_eq!(v.rank(), HandRank::FullHouse);
    /// ```
    pub fn eval(hand: &[Card; 5]) -> HandValue {
        let ranks = card_ranks(hand);
        let flush = is_flush(hand);
        let straight = is_straight(&ranks);

        if straight && flush {
            return HandValue::StraightFlush(ranks[0]);
        }

        if let Some(quads) = kind(4, &ranks) {
            let kicker = kind(1, &ranks).unwrap_or(quads);
            return HandValue::FourOfAKind(quads, kicker);
        }

        if let (Some(trips), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
            return HandValue::FullHouse(trips, pair);
        }

        if flush {
            return HandValue::Flush(ranks);
        }

        if straight {
            return HandValue::Straight(ranks[0]);
        }

        if let Some(trips) = kind(3, &ranks) {
            return HandValue::ThreeOfAKind(trips, ranks);
        }

        if let Some((high, low)) = two_pair(&ranks) {
            return HandValue::TwoPair(high, low, ranks);
        }

        if let Some(pair) = kind(2, &ranks) {
            return HandValue::OnePair(pair, ranks);
        }

        HandValue::HighCard(ranks)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            HandValue::HighCard(..) => HandRank::HighCard,
            HandValue::OnePair(..) => HandRank::OnePair,
            HandValue::TwoPair(..) => HandRank::TwoPair,
            HandValue::ThreeOfAKind(..) => HandRank::ThreeOfAKind,
            HandValue::Straight(..) => HandRank::Straight,
            HandValue::Flush(..) => HandRank::Flush,
            HandValue::FullHouse(..) => HandRank::FullHouse,
            HandValue::FourOfAKind(..) => HandRank::FourOfAKind,
            HandValue::StraightFlush(..) => HandRank::StraightFlush,
        }
    }
}

/// A 5 cards hand with its value.
///
/// A deserialized hand reads only its cards and evaluates them again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HandCards")]
pub struct Hand {
    cards: [Card; 5],
    value: HandValue,
}

#[derive(Deserialize)]
struct HandCards {
    cards: [Card; 5],
}

impl From<HandCards> for Hand {
    fn from(hand: HandCards) -> Self {
        Hand::new(hand.cards)
    }
}

impl Hand {
    /// The smallest number of cards [Hand::best_of] accepts.
    pub const MIN_CARDS: usize = 5;

    /// The largest number of cards [Hand::best_of] accepts.
    pub const MAX_CARDS: usize = 7;

    /// Creates a hand evaluating the given cards.
    pub fn new(cards: [Card; 5]) -> Self {
        let value = HandValue::eval(&cards);
        Self { cards, value }
    }

    /// Finds the best 5 cards hand out of 5 to 7 cards.
    ///
    /// All 5 cards subsets are visited in [KSubsets] order, if more than one
    /// subset has the best value the first one is returned.
    pub fn best_of(cards: &[Card]) -> Result<Hand> {
        if !(Self::MIN_CARDS..=Self::MAX_CARDS).contains(&cards.len()) {
            return Err(Error::InvalidPoolSize {
                expected: "5 to 7",
                found: cards.len(),
            });
        }

        let mut subsets = KSubsets::<5>::new(cards.len()).map(|s| Hand::new(s.map(|i| cards[i])));

        // There is at least one subset for 5 or more cards.
        let mut best = subsets.next().ok_or(Error::InvalidPoolSize {
            expected: "5 to 7",
            found: cards.len(),
        })?;

        for hand in subsets {
            if hand.value > best.value {
                trace!("Best hand {hand} {:?}", hand.value);
                best = hand;
            }
        }

        Ok(best)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }

    /// Checks if this hand contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The hand cards tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_string).collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}
