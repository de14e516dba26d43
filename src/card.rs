//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-letter code used in card names (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero points.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the face value of the card, counting an Ace as 11.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Returns the rank symbol: `2`..`10`, `J`, `Q`, `K` or `A`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.suit.letter())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_count_ten_and_ace_eleven() {
        assert_eq!(Card::new(Suit::Clubs, 11).points(), 10);
        assert_eq!(Card::new(Suit::Clubs, 12).points(), 10);
        assert_eq!(Card::new(Suit::Clubs, 13).points(), 10);
        assert_eq!(Card::new(Suit::Clubs, 1).points(), 11);
        assert_eq!(Card::new(Suit::Clubs, 7).points(), 7);
    }

    #[test]
    fn display_uses_symbol_and_suit_letter() {
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10H");
        assert_eq!(Card::new(Suit::Spades, 1).to_string(), "AS");
        assert_eq!(Card::new(Suit::Diamonds, 12).to_string(), "QD");
    }
}
