//! The single-deck shoe cards are drawn from.

extern crate alloc;

use alloc::vec::Vec;

use rand::RngCore;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A 52-card deck consumed from the front.
///
/// The deck never runs dry: drawing from an empty deck rebuilds all 52 cards
/// and reshuffles them first. The random source is injected so rounds can be
/// replayed from a seed.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled deck driven by a `ChaCha8` generator seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a shuffled deck using the given random source.
    #[must_use]
    pub fn new(rng: R) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset_and_shuffle();
        deck
    }

    /// Refills the deck with all 52 cards and shuffles it.
    pub fn reset_and_shuffle(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.cards.push(Card::new(suit, rank));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, reshuffling a fresh deck first when empty.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            tracing::debug!("deck exhausted, reshuffling");
            self.reset_and_shuffle();
        }
        self.cards.remove(0)
    }

    /// Replaces the deck contents with `cards`, drawn in the given order.
    ///
    /// Once these cards run out the deck reshuffles as usual.
    pub fn stack(&mut self, cards: &[Card]) {
        self.cards.clear();
        self.cards.extend_from_slice(cards);
    }

    /// Returns the cards left, next draw first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_holds_every_card_once() {
        let deck = Deck::from_seed(3);
        assert_eq!(deck.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|c| **c == Card::new(suit, rank))
                    .count();
                assert_eq!(count, 1, "{suit:?} {rank}");
            }
        }
    }

    #[test]
    fn drawn_card_leaves_the_deck() {
        let mut deck = Deck::from_seed(9);
        for _ in 0..DECK_SIZE {
            let card = deck.draw();
            assert!(!deck.contains(&card));
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_deck_reshuffles_on_draw() {
        let mut deck = Deck::from_seed(1);
        deck.stack(&[]);
        let card = deck.draw();
        assert_eq!(deck.len(), DECK_SIZE - 1);
        assert!(!deck.contains(&card));
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::from_seed(42);
        let b = Deck::from_seed(42);
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn stacked_cards_draw_in_order() {
        let mut deck = Deck::from_seed(0);
        deck.stack(&[Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 1)]);
        assert_eq!(deck.draw(), Card::new(Suit::Hearts, 5));
        assert_eq!(deck.draw(), Card::new(Suit::Clubs, 1));
    }
}
