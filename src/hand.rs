//! Hand scoring and the player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Computes the best blackjack score for `cards`.
///
/// Every Ace starts at 11 and is counted as 1 instead, one at a time, while
/// the total is over 21.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether `cards` hold an Ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a natural (21 from two cards).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-down card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |c| c.points())
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    #[test]
    fn ace_and_king_is_21() {
        assert_eq!(score(&cards(&[1, 13])), 21);
        assert!(is_soft(&cards(&[1, 13])));
    }

    #[test]
    fn two_aces_and_nine_is_21() {
        assert_eq!(score(&cards(&[1, 1, 9])), 21);
    }

    #[test]
    fn eleven_aces_is_21() {
        assert_eq!(score(&cards(&[1; 11])), 21);
    }

    #[test]
    fn hard_bust_stays_over() {
        assert_eq!(score(&cards(&[10, 9, 5])), 24);
        assert!(!is_soft(&cards(&[10, 9, 5])));
    }

    #[test]
    fn aces_soften_only_as_needed() {
        assert_eq!(score(&cards(&[1, 6])), 17);
        assert!(is_soft(&cards(&[1, 6])));
        assert_eq!(score(&cards(&[1, 6, 10])), 17);
        assert!(!is_soft(&cards(&[1, 6, 10])));
        assert_eq!(score(&cards(&[1, 1, 1, 1, 10, 9])), 23);
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn dealer_hides_hole_value_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::new(Suit::Clubs, 6));

        assert_eq!(dealer.visible_value(), 11);
        assert_eq!(dealer.hole_card(), Some(&Card::new(Suit::Clubs, 6)));
        dealer.reveal_hole();
        assert_eq!(dealer.visible_value(), 17);
        assert!(dealer.is_soft());

        dealer.clear();
        assert!(dealer.is_empty());
        assert!(!dealer.is_hole_revealed());
    }
}
