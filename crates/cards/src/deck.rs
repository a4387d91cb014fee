// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, Color, KSubsets, Rank, Suit};

/// A cards Deck.
///
/// A default deck has the 52 cards ordered by suit (clubs, spades, hearts,
/// diamonds) and by rank from deuce to ace within a suit.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck with all the cards of the given color in deck order.
    pub fn with_color(color: Color) -> Self {
        let cards = color
            .suits()
            .into_iter()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each K-cards hand, hands are visited in
    /// [KSubsets] order.
    pub fn for_each<const K: usize, F>(&self, mut f: F)
    where
        F: FnMut(&[Card; K]),
    {
        for subset in KSubsets::<K>::new(self.cards.len()) {
            f(&subset.map(|idx| self.cards[idx]));
        }
    }

    /// Returns an iterator over the cards in the deck.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_order() {
        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        assert_eq!(cards[0].to_string(), "2C");
        assert_eq!(cards[12].to_string(), "AC");
        assert_eq!(cards[13].to_string(), "2S");
        assert_eq!(cards[51].to_string(), "AD");
        assert!(cards.iter().enumerate().all(|(idx, c)| c.id() == idx));
    }

    #[test]
    fn deck_with_color() {
        let black = Deck::with_color(Color::Black);
        assert_eq!(black.count(), 26);
        assert!(black.iter().all(|c| c.color() == Color::Black));

        let red = Deck::with_color(Color::Red);
        assert_eq!(red.count(), 26);
        assert!(red.iter().all(|c| c.color() == Color::Red));
        assert_eq!(red.iter().next().map(Card::to_string).unwrap(), "2H");
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each::<2, _>(|cards| {
            hands.insert(cards.to_vec());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each::<3, _>(|cards| {
            hands.insert(cards.to_vec());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert!(!deck.contains(Card::new(Rank::King, Suit::Diamonds)));

        let mut count = 0;
        deck.for_each::<5, _>(|cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
